//! Prompt text sent with every framework request.
//!
//! Bump [`PROMPT_VERSION`] whenever the wording changes so logs can tell
//! which prompt produced a given result.

pub const PROMPT_VERSION: &str = "2025-01";

/// Sampling temperature for framework generation.
pub const FRAMEWORK_TEMPERATURE: f32 = 0.7;

/// Returned in place of an empty generation.
pub const EMPTY_RESPONSE_FALLBACK: &str = "No response generated.";

pub const SYSTEM_PROMPT: &str = r#"You are an expert academic assistant, specializing in quantitative marketing and microeconomic theory, particularly game theory.
Your role is to guide a first-year PhD student in transforming a nascent research concept into a publishable framework for a top marketing journal like Marketing Science or Management Science.
Strictly adhere to the structure provided in the prompt. Output MUST be formatted in clear Markdown."#;

/// Headings the template asks for, in order.
pub const SECTION_TITLES: [&str; 5] = [
    "1. Phenomenon & Context",
    "2. Research Questions",
    "3. Formal Model Design Principles",
    "4. Anticipated Model Solution & Results Characteristics",
    "5. Interpretation & Contribution",
];

const IDEA_PLACEHOLDER: &str = "{idea}";

const FRAMEWORK_TEMPLATE: &str = r#"
My preliminary research idea is: **{idea}**

Please elaborate on this idea by structuring a comprehensive academic paper framework, addressing each of the following critical components:

### 1. Phenomenon & Context
- Identify and articulate a timely and puzzling real-world phenomenon or a critical gap in existing literature that motivates this research.
- Explain why this phenomenon is intriguing and how it presents an opportunity for innovative findings.
- Briefly discuss the relevance of this context to quantitative marketing.

### 2. Research Questions
- Based on the phenomenon identified above, formulate three distinct, well-defined research questions.
- For each question, indicate how it would translate into defining essential components of a game theory model (e.g., identifying potential players, their objectives, information structure, endogenous variables, exogenous parameters, and the specific relationships or impacts to be analyzed).

### 3. Formal Model Design Principles
- Propose a central trade-off that the model will explore.
- Discuss how the model will be constructed to prioritize cleanliness, ensuring it clearly reflects this core trade-off.
- Explain how the model will maintain relevance to accurately capture the studied mechanism or phenomenon, avoiding ad-hoc assumptions that might drive the main results.
- Suggest potential players, their actions, and the timing of events (if applicable) that would be central to modeling this idea.

### 4. Anticipated Model Solution & Results Characteristics
- Describe the characteristics of the ideal results: what kind of relationships between parameters would be interesting?
- Suggest how the model might yield surprising (e.g., non-monotonic), non-trivial, and tractably solvable outcomes.
- What kind of "clean" mechanism do you anticipate the findings will reveal?

### 5. Interpretation & Contribution
- Outline how the anticipated findings would be interpreted to demonstrate their theoretical contribution to quantitative marketing and microeconomic theory.
- Suggest potential managerial implications or policy recommendations derived from the research.
- Explain how these contributions would be "sold" to reviewers and readers of top-tier journals.
"#;

/// The user turn for `idea`.
pub fn framework_prompt(idea: &str) -> String {
    FRAMEWORK_TEMPLATE.replacen(IDEA_PLACEHOLDER, idea, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_is_interpolated_once() {
        let prompt = framework_prompt("dynamic pricing and reviews");
        assert!(prompt.contains("My preliminary research idea is: **dynamic pricing and reviews**"));
        assert!(!prompt.contains(IDEA_PLACEHOLDER));
    }

    #[test]
    fn template_asks_for_every_section_heading() {
        let prompt = framework_prompt("x");
        for title in SECTION_TITLES {
            assert!(prompt.contains(&format!("### {title}\n")), "missing heading {title}");
        }
    }

    #[test]
    fn idea_containing_placeholder_text_is_left_alone() {
        let prompt = framework_prompt("study {idea} literally");
        assert!(prompt.contains("**study {idea} literally**"));
    }

    #[test]
    fn system_prompt_demands_markdown() {
        assert!(SYSTEM_PROMPT.contains("Markdown"));
    }
}
