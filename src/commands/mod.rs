pub mod config;
pub mod decompose;
pub mod simplify;

use anyhow::Error;
use serde_json::Value;

use crate::args::CompletionArgs;
use crate::clients::deepseek::DeepSeekClient;
use crate::models::chat_request::ChatRequest;
use crate::models::step::{parse_step_list, StepSuggestion};
use crate::models::Message;
use crate::repos::config::{get_base_url, get_model, Credentials};
use crate::repos::todo::TodoStore;

async fn request_steps(
    messages: Vec<Message>,
    response_format: Value,
    args: &CompletionArgs,
) -> Result<Vec<StepSuggestion>, Error> {
    let client = DeepSeekClient::with_base_url(Credentials::from_config(), get_base_url());
    let request = ChatRequest::new(messages)
        .with_model(args.model.clone().unwrap_or_else(get_model))
        .with_temperature(args.temperature)
        .with_top_p(args.top_p)
        .with_max_tokens(args.max_tokens)
        .with_response_format(response_format);

    let content = client.complete(&request).await?;
    let steps = parse_step_list(&content)?;
    Ok(steps)
}

fn print_steps(steps: &[StepSuggestion], json: bool) -> Result<(), Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(steps)?);
        return Ok(());
    }

    let mut store = TodoStore::new();
    for suggestion in steps {
        if let Some(item) = store.add_todo(&suggestion.step) {
            let mark = if item.completed { "x" } else { " " };
            println!("[{}] {}", mark, item.text);
            println!("    {}", suggestion.description);
        }
    }
    println!(
        "{} steps, {} completed",
        store.total_todos(),
        store.completed_count()
    );
    Ok(())
}
