use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::models::Message;

/// Persona for breaking a goal into 3-5 micro-steps.
pub const SYSTEM_MICRO_STEPS: &str = "You are a world-class behavior design expert, fluent in BJ Fogg's behavior model (B=MAP), and you specialize in making behavior happen by driving the task's difficulty (Ability, A) as low as it can go. Your task is to break the goal the user gives you into 3-5 'micro-steps'. Follow these rules strictly:\n1. Every step must drastically lower the barrier to acting (A).\n2. Every step must be simple enough to finish within 2 minutes and focus on starting, not finishing. For example: the first step must be 'open the file' or 'put on your shoes', never 'finish the first chapter'.\n3. Give every step a short explanation of how it lowers the barrier.\n4. The user's goal is a positive behavior (B) they want to make happen.\n5. Answer strictly as JSON: an array of objects with 'step' and 'description' fields, with no other text or explanation.";

/// Persona for breaking an already-small step into 3 nano-steps.
pub const SYSTEM_NANO_STEPS: &str = "You are an expert in minimalist behavior decomposition. Your task is to take a step that is already small and break it into 3 even simpler, more atomic 'nano-steps', re-assessing the behavior and driving its difficulty to the absolute minimum. For every step:\n1. The 'step' field is the concrete action to take, such as 'open a notepad' or 'write down the title'.\n2. The 'description' field explains what the step does or why it matters.\nAnswer strictly as JSON: an array of objects with 'step' and 'description' fields, with no other text or explanation.";

pub static MICRO_STEPS_RESPONSE_FORMAT: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "json_object",
        "schema": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "step": {
                        "type": "string",
                        "description": "The concrete micro-action, at most 10 characters."
                    },
                    "description": {
                        "type": "string",
                        "description": "How this micro-step lowers the difficulty."
                    }
                },
                "required": ["step", "description"]
            }
        }
    })
});

pub static NANO_STEPS_RESPONSE_FORMAT: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "json_object",
        "schema": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "step": {
                        "type": "string",
                        "description": "The concrete step, at most 10 characters."
                    },
                    "description": {
                        "type": "string",
                        "description": "What this step does."
                    }
                },
                "required": ["step", "description"]
            }
        }
    })
});

/// Conversation asking the model to decompose a goal into micro-steps.
/// Always `[system, user]`, with the goal embedded verbatim.
pub fn micro_steps_messages(goal: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_MICRO_STEPS),
        Message::user(format!(
            "Break my goal into micro-steps:\nThe goal is: {}",
            goal
        )),
    ]
}

/// Conversation asking the model to decompose a step that turned out to be
/// too difficult into nano-steps. Always `[system, user]`, with the step
/// embedded verbatim.
pub fn nano_steps_messages(step: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_NANO_STEPS),
        Message::user(format!(
            "This step is still too difficult: {}\nBreak it down into 3 simpler, more atomic steps, each with a concrete action and an explanation.",
            step
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_micro_steps_messages_shape() {
        let goal = "write a novel";
        let messages = micro_steps_messages(goal);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_MICRO_STEPS);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains(goal));
    }

    #[test]
    fn test_nano_steps_messages_shape() {
        let step = "open the manuscript";
        let messages = nano_steps_messages(step);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, SYSTEM_NANO_STEPS);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains(step));
    }

    #[test]
    fn test_nano_persona_differs_from_micro() {
        let micro = micro_steps_messages("g");
        let nano = nano_steps_messages("g");
        assert_ne!(micro[0].content, nano[0].content);
    }

    #[test]
    fn test_empty_input_is_accepted() {
        let messages = micro_steps_messages("");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_response_formats_are_json_object_hints() {
        assert_eq!(MICRO_STEPS_RESPONSE_FORMAT["type"], "json_object");
        assert_eq!(NANO_STEPS_RESPONSE_FORMAT["type"], "json_object");
        assert_eq!(
            MICRO_STEPS_RESPONSE_FORMAT["schema"]["items"]["required"],
            json!(["step", "description"])
        );
        assert_eq!(
            NANO_STEPS_RESPONSE_FORMAT["schema"]["items"]["required"],
            json!(["step", "description"])
        );
    }
}
