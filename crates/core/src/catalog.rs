#![forbid(unsafe_code)]

//! Read-only catalog of the built-in collaboration methods.
//!
//! Definitions are fixed at build time. Custom methods authored through the
//! draft builder live in storage and are resolved after the built-ins.

use crate::ids::MethodId;
use crate::model::{Category, Difficulty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodStep {
    pub title: String,
    pub description: String,
    pub success_criteria: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollabMethod {
    pub id: MethodId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub category: Category,
    pub steps: Vec<MethodStep>,
    pub outcome: String,
    pub success_criteria: Vec<String>,
}

impl CollabMethod {
    pub fn step(&self, index: usize) -> Option<&MethodStep> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    methods: Vec<CollabMethod>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            methods: vec![
                code_review_challenge(),
                mini_product_sprint(),
                business_case_study(),
                startup_pitch_workshop(),
                technical_architecture_design(),
                customer_interview_practice(),
            ],
        }
    }

    pub fn find(&self, id: MethodId) -> Option<&CollabMethod> {
        self.methods.iter().find(|method| method.id == id)
    }

    pub fn methods(&self) -> &[CollabMethod] {
        &self.methods
    }
}

fn step(title: &str, description: &str, criteria: &[&str]) -> MethodStep {
    MethodStep {
        title: title.to_string(),
        description: description.to_string(),
        success_criteria: criteria.iter().map(|c| c.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn method(
    id: i64,
    title: &str,
    description: &str,
    duration: &str,
    difficulty: Difficulty,
    category: Category,
    steps: Vec<MethodStep>,
    outcome: &str,
    criteria: &[&str],
) -> CollabMethod {
    CollabMethod {
        id: MethodId(id),
        title: title.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        difficulty,
        category,
        steps,
        outcome: outcome.to_string(),
        success_criteria: criteria.iter().map(|c| c.to_string()).collect(),
    }
}

fn code_review_challenge() -> CollabMethod {
    method(
        1,
        "Code Review Challenge",
        "Review each other's code samples and provide constructive feedback to assess technical compatibility.",
        "2-3 hours",
        Difficulty::Easy,
        Category::Technical,
        vec![
            step(
                "Share Code Samples",
                "Each person shares a recent code sample (GitHub repo or snippet)",
                &[
                    "Both parties share a substantial code sample (minimum 100 lines)",
                    "Code includes comments and documentation",
                    "Repository or snippet is accessible and well-organized",
                ],
            ),
            step(
                "Review Code",
                "Spend 30-45 minutes reviewing the other person's code",
                &[
                    "Complete thorough review within the time limit",
                    "Examine code structure, logic, and best practices",
                    "Take notes on strengths and areas for improvement",
                ],
            ),
            step(
                "Provide Written Feedback",
                "Provide written feedback on code quality, structure, and suggestions",
                &[
                    "Write detailed feedback covering at least 3 specific areas",
                    "Include both positive observations and constructive criticism",
                    "Provide actionable suggestions for improvement",
                ],
            ),
            step(
                "Discussion Call",
                "Discuss feedback in a 30-minute video call",
                &[
                    "Complete 30-minute video call discussing the feedback",
                    "Both parties ask clarifying questions",
                    "Maintain professional and constructive dialogue",
                ],
            ),
            step(
                "Evaluate Compatibility",
                "Evaluate communication style and technical alignment",
                &[
                    "Assess technical skill compatibility",
                    "Evaluate communication effectiveness",
                    "Determine mutual interest in further collaboration",
                ],
            ),
        ],
        "Assess technical skills, code quality standards, and communication style",
        &[
            "Both parties provide detailed written feedback (minimum 3 specific points each)",
            "Complete 30-minute discussion call with constructive dialogue",
            "Identify at least 2 areas of technical alignment or complementary skills",
            "Rate each other's code quality and communication on agreed criteria",
            "Decide on mutual interest in further collaboration",
        ],
    )
}

fn mini_product_sprint() -> CollabMethod {
    method(
        2,
        "Mini Product Sprint",
        "Build a simple feature or prototype together over a weekend to test collaboration dynamics.",
        "2-3 days",
        Difficulty::Medium,
        Category::Product,
        vec![
            step(
                "Define Project Scope",
                "Define a simple feature or mini-product to build together",
                &[
                    "Agree on a specific, achievable project scope",
                    "Define clear success metrics for the deliverable",
                    "Set realistic timeline and milestones",
                ],
            ),
            step(
                "Setup Development Environment",
                "Set up shared development environment (GitHub, Figma, etc.)",
                &[
                    "Create shared repository with proper access permissions",
                    "Set up project structure and initial files",
                    "Establish communication channels and tools",
                ],
            ),
            step(
                "Divide Responsibilities",
                "Divide responsibilities based on each person's strengths",
                &[
                    "Clearly define each person's responsibilities",
                    "Align tasks with individual strengths and expertise",
                    "Establish dependencies and handoff points",
                ],
            ),
            step(
                "Execute Sprint",
                "Work together over 2-3 days with regular check-ins",
                &[
                    "Complete daily check-ins to discuss progress",
                    "Meet individual commitments and deadlines",
                    "Collaborate effectively on shared components",
                ],
            ),
            step(
                "Present and Reflect",
                "Present the final result and reflect on the collaboration",
                &[
                    "Deliver working prototype or feature",
                    "Present results to each other with demo",
                    "Complete retrospective on collaboration process",
                ],
            ),
        ],
        "Test working dynamics, project management skills, and ability to deliver together",
        &[
            "Deliver a working prototype or feature within the timeframe",
            "Maintain clear communication with daily check-ins",
            "Successfully divide tasks and meet individual commitments",
            "Resolve at least one disagreement or challenge collaboratively",
            "Complete joint retrospective identifying strengths and areas for improvement",
        ],
    )
}

fn business_case_study() -> CollabMethod {
    method(
        3,
        "Business Case Study",
        "Analyze a real business problem and present solutions together to evaluate strategic thinking.",
        "4-5 hours",
        Difficulty::Medium,
        Category::Business,
        vec![
            step(
                "Select Case Study",
                "Choose a relevant business case study or real company challenge",
                &[
                    "Select a case study relevant to your industry or interests",
                    "Ensure sufficient complexity to demonstrate analytical skills",
                    "Agree on the scope and focus areas for analysis",
                ],
            ),
            step(
                "Independent Research",
                "Research the problem independently (1-2 hours)",
                &[
                    "Complete 1-2 hours of focused research",
                    "Gather data from multiple credible sources",
                    "Document key findings and initial insights",
                ],
            ),
            step(
                "Collaborative Discussion",
                "Meet to discuss findings and brainstorm solutions",
                &[
                    "Share research findings openly and thoroughly",
                    "Generate multiple solution alternatives together",
                    "Build on each other's ideas constructively",
                ],
            ),
            step(
                "Create Joint Presentation",
                "Create a joint presentation or document with recommendations",
                &[
                    "Produce professional presentation with 3-5 recommendations",
                    "Include supporting data and rationale for each recommendation",
                    "Demonstrate clear problem-solution alignment",
                ],
            ),
            step(
                "Present and Evaluate",
                "Present to each other and discuss different approaches",
                &[
                    "Deliver clear, compelling presentation of findings",
                    "Discuss alternative approaches and trade-offs",
                    "Provide constructive feedback on analytical process",
                ],
            ),
        ],
        "Evaluate analytical thinking, business acumen, and collaborative problem-solving",
        &[
            "Complete individual research with documented findings",
            "Produce joint presentation with 3-5 actionable recommendations",
            "Demonstrate understanding of business fundamentals and market dynamics",
            "Show ability to synthesize different perspectives into cohesive solutions",
            "Provide constructive feedback on each other's analytical approach",
        ],
    )
}

fn startup_pitch_workshop() -> CollabMethod {
    method(
        4,
        "Startup Pitch Workshop",
        "Develop and refine each other's startup ideas through structured feedback sessions.",
        "3-4 hours",
        Difficulty::Easy,
        Category::Business,
        vec![
            step(
                "Prepare Initial Pitches",
                "Each person prepares a 5-minute pitch of their startup idea",
                &[
                    "Create structured 5-minute pitch covering problem, solution, market",
                    "Include visual aids or slides if helpful",
                    "Practice timing to stay within limit",
                ],
            ),
            step(
                "Present to Each Other",
                "Present pitches to each other",
                &[
                    "Deliver clear, engaging presentation within time limit",
                    "Maintain good eye contact and confident delivery",
                    "Allow time for clarifying questions",
                ],
            ),
            step(
                "Provide Structured Feedback",
                "Provide structured feedback using a framework (problem, solution, market, etc.)",
                &[
                    "Use consistent framework to evaluate each pitch",
                    "Provide specific, actionable feedback on each component",
                    "Balance constructive criticism with positive observations",
                ],
            ),
            step(
                "Collaborative Improvement",
                "Brainstorm improvements and iterations together",
                &[
                    "Generate specific improvement suggestions for each pitch",
                    "Collaborate on refining value propositions",
                    "Identify potential synergies between ideas",
                ],
            ),
            step(
                "Re-pitch with Improvements",
                "Re-pitch with incorporated feedback",
                &[
                    "Incorporate feedback into revised pitch",
                    "Demonstrate improved clarity and compelling narrative",
                    "Show receptiveness to feedback and ability to iterate",
                ],
            ),
        ],
        "Assess communication skills, receptiveness to feedback, and strategic thinking",
        &[
            "Deliver clear, compelling 5-minute pitches for both ideas",
            "Provide structured feedback covering problem, solution, market, and execution",
            "Incorporate feedback into improved second pitch versions",
            "Demonstrate active listening and openness to criticism",
            "Identify potential synergies between the two startup concepts",
        ],
    )
}

fn technical_architecture_design() -> CollabMethod {
    method(
        5,
        "Technical Architecture Design",
        "Collaborate on designing the technical architecture for a hypothetical or real project.",
        "3-4 hours",
        Difficulty::Hard,
        Category::Technical,
        vec![
            step(
                "Define System Requirements",
                "Define requirements for a technical system (e.g., social media app)",
                &[
                    "Document functional and non-functional requirements",
                    "Define expected scale and performance metrics",
                    "Identify key constraints and assumptions",
                ],
            ),
            step(
                "Individual Architecture Sketches",
                "Individually sketch initial architecture ideas",
                &[
                    "Create detailed architecture diagram with major components",
                    "Consider scalability, security, and performance",
                    "Document technology choices and rationale",
                ],
            ),
            step(
                "Share and Discuss Approaches",
                "Share and discuss different approaches",
                &[
                    "Present architecture clearly with visual diagrams",
                    "Explain design decisions and trade-offs",
                    "Ask thoughtful questions about alternative approaches",
                ],
            ),
            step(
                "Collaborate on Unified Design",
                "Collaborate on a unified architecture design",
                &[
                    "Synthesize best elements from both approaches",
                    "Reach consensus on major architectural decisions",
                    "Address scalability and reliability concerns",
                ],
            ),
            step(
                "Document Final Architecture",
                "Document decisions and trade-offs made together",
                &[
                    "Create comprehensive architecture documentation",
                    "Document key decisions and rationale",
                    "Include deployment and monitoring considerations",
                ],
            ),
        ],
        "Evaluate technical depth, system design skills, and decision-making process",
        &[
            "Create detailed system architecture diagram with all major components",
            "Document key technical decisions and rationale behind choices",
            "Address scalability, security, and performance considerations",
            "Demonstrate knowledge of relevant technologies and best practices",
            "Reach consensus on final design through collaborative discussion",
        ],
    )
}

fn customer_interview_practice() -> CollabMethod {
    method(
        6,
        "Customer Interview Practice",
        "Conduct mock customer interviews to validate a business idea and practice user research skills.",
        "2-3 hours",
        Difficulty::Easy,
        Category::Product,
        vec![
            step(
                "Select Validation Target",
                "Choose a startup idea to validate",
                &[
                    "Select specific startup idea with clear value proposition",
                    "Define target customer segment to focus on",
                    "Identify key assumptions to test through interviews",
                ],
            ),
            step(
                "Prepare Interview Guide",
                "Prepare interview questions together",
                &[
                    "Create comprehensive interview guide with 10-15 questions",
                    "Include mix of open-ended and follow-up questions",
                    "Focus on customer problems rather than solutions",
                ],
            ),
            step(
                "Role-Play Setup",
                "Take turns being interviewer and customer",
                &[
                    "Define realistic customer personas for role-play",
                    "Establish clear scenarios and contexts",
                    "Agree on feedback format for interview performance",
                ],
            ),
            step(
                "Conduct Mock Interviews",
                "Conduct 2-3 mock interviews each",
                &[
                    "Complete 4-6 total mock interviews with different scenarios",
                    "Demonstrate effective interviewing techniques",
                    "Take detailed notes during each interview",
                ],
            ),
            step(
                "Analyze and Synthesize",
                "Analyze findings and discuss insights together",
                &[
                    "Extract 3-5 key insights about customer needs",
                    "Identify patterns across multiple interviews",
                    "Translate insights into actionable product recommendations",
                ],
            ),
        ],
        "Test user research skills, empathy, and ability to extract insights from data",
        &[
            "Develop comprehensive interview guide with 10-15 thoughtful questions",
            "Complete 4-6 mock interviews with realistic customer personas",
            "Extract 3-5 key insights about user needs and pain points",
            "Demonstrate effective interviewing techniques (open-ended questions, active listening)",
            "Synthesize findings into actionable recommendations for product development",
        ],
    )
}
