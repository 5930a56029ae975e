use anyhow::Error;

use crate::args::SimplifySubCommand;
use crate::prompts::{nano_steps_messages, NANO_STEPS_RESPONSE_FORMAT};

pub async fn run(cmd: &SimplifySubCommand) -> Result<(), Error> {
    let steps = super::request_steps(
        nano_steps_messages(&cmd.step),
        NANO_STEPS_RESPONSE_FORMAT.clone(),
        &cmd.completion,
    )
    .await?;
    super::print_steps(&steps, cmd.completion.json)
}
