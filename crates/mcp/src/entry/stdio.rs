#![forbid(unsafe_code)]

use crate::{JsonRpcRequest, McpServer, json_rpc_error};
use serde_json::Value;
use std::io::{BufRead, BufReader, Read, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Framing {
    NewlineJson,
    ContentLength,
}

/// Framing is auto-detected from the first inbound line and then pinned for
/// the whole process so requests and responses never mix styles.
pub(crate) fn run_stdio(server: &mut McpServer) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut stdout = std::io::stdout().lock();
    let mut framing: Option<Framing> = None;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let effective = match framing {
            Some(framing) => framing,
            None => {
                let Some(detected) = detect_framing(&line) else {
                    continue;
                };
                framing = Some(detected);
                detected
            }
        };

        match effective {
            Framing::NewlineJson => {
                let reply = process_raw(server, line.trim().as_bytes());
                if let Some(reply) = reply {
                    writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
                    stdout.flush()?;
                }
            }
            Framing::ContentLength => {
                let Some(body) = read_content_length_frame(&mut reader, line)? else {
                    break;
                };
                let reply = process_raw(server, &body);
                if let Some(reply) = reply {
                    let body = serde_json::to_vec(&reply)?;
                    write!(stdout, "Content-Length: {}\r\n\r\n", body.len())?;
                    stdout.write_all(&body)?;
                    stdout.flush()?;
                }
            }
        }
    }

    Ok(())
}

fn detect_framing(line: &str) -> Option<Framing> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(Framing::NewlineJson);
    }
    // Header framing: Content-Length (or Content-Type first) then a blank
    // line and the JSON body.
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("content-length:") || lower.starts_with("content-type:") {
        return Some(Framing::ContentLength);
    }
    None
}

fn parse_content_length(line: &str) -> Option<usize> {
    let (key, value) = line.trim().split_once(':')?;
    if !key.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse::<usize>().ok()
}

fn read_content_length_frame(
    reader: &mut BufReader<std::io::StdinLock<'_>>,
    mut header: String,
) -> std::io::Result<Option<Vec<u8>>> {
    const MAX_CONTENT_LENGTH_BYTES: usize = 16 * 1024 * 1024;

    let mut content_length = parse_content_length(&header);
    while !header.trim_end().is_empty() {
        header.clear();
        if reader.read_line(&mut header)? == 0 {
            // EOF mid-header: treat as connection close.
            return Ok(None);
        }
        if content_length.is_none() {
            content_length = parse_content_length(&header);
        }
    }

    let Some(len) = content_length else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Missing Content-Length header",
        ));
    };
    if len > MAX_CONTENT_LENGTH_BYTES {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "Content-Length exceeds max allowed size",
        ));
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(body))
}

fn process_raw(server: &mut McpServer, raw: &[u8]) -> Option<Value> {
    let data: Value = match serde_json::from_slice(raw) {
        Ok(value) => value,
        Err(err) => return Some(json_rpc_error(None, -32700, &format!("Parse error: {err}"))),
    };

    let Some(obj) = data.as_object() else {
        return Some(json_rpc_error(None, -32600, "Invalid Request"));
    };
    let id = obj.get("id").cloned();
    if !obj.contains_key("method") {
        return Some(json_rpc_error(id, -32600, "Invalid Request"));
    }

    let request: JsonRpcRequest = match serde_json::from_value(data) {
        Ok(request) => request,
        Err(err) => {
            return Some(json_rpc_error(id, -32600, &format!("Invalid Request: {err}")));
        }
    };

    server.handle(request)
}
