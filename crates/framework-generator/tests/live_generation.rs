use framework_generator::LlmFrameworkGenerator;
use llm::{Client, Provider};
use scholar_core::{parse_sections, FrameworkGenerator};

#[tokio::test]
#[ignore = "calls the Gemini API"]
async fn gemini_follows_the_section_convention() {
    let _ = dotenvy::from_path("../../.env");
    let client = Client::from_env(Provider::Gemini, Provider::Gemini.default_model()).unwrap();
    let generator = LlmFrameworkGenerator::new(client);

    let text = generator
        .generate_framework("dynamic pricing when consumers read reviews")
        .await
        .unwrap();
    let sections = parse_sections(&text);
    assert!(sections.len() >= 5, "got {} sections:\n{text}", sections.len());
}
