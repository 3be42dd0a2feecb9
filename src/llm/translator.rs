use crate::llm::client::LlmClient;
use console::style;

/// Turns a free-text instruction into a shell-ready git command string.
///
/// Service failures are not propagated: the caller gets `None` and decides
/// the fallback. Whatever text does come back is normalized unconditionally
/// before anyone looks at it.
pub struct Translator {
    client: Box<dyn LlmClient>,
}

impl Translator {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn suggest(&self, instruction: &str) -> Option<String> {
        let prompt = format!(
            "Convert this instruction into a git command only, no explanation: {}",
            instruction
        );

        let reply = match self.client.complete(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                eprintln!("{} {}", style("Request failed:").yellow().bold(), e);
                return None;
            }
        };

        let command = normalize_reply(&reply);
        if command.is_empty() {
            return None;
        }

        println!(
            "{} {}",
            style("Suggested command:").cyan().bold(),
            style(&command).bold()
        );

        Some(command)
    }
}

/// Strip markdown fencing and backticks from a raw reply, then rewrite
/// statement separators so chained commands only continue on success.
pub fn normalize_reply(reply: &str) -> String {
    reply
        .replace("```bash", "")
        .replace("```", "")
        .replace('`', "")
        .trim()
        .replace(';', " && ")
}
