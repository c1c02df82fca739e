//! Actions available at home and in combat.
//!
//! None of these touch the store or a remote service; they read the snapshot
//! and at most change `character_class`.

use operator_domain::{CharacterClass, Player};

use super::result::ActionResult;
use super::router::ActionSet;

pub fn get_info(player: Player) -> ActionResult {
    let effects = if player.status_effects.is_empty() {
        "none".to_string()
    } else {
        player.status_effects.join(", ")
    };
    let mut messages = vec![
        format!("Name: {}", player.name),
        format!("Class: {}", player.character_class),
        format!("HP: {}/{}", player.hit_points, player.max_hit_points),
        format!("EX: {}/{}", player.ex, player.max_ex),
        format!("Status effects: {effects}"),
        format!("Location: {}", player.context),
    ];
    if !player.target.is_empty() {
        messages.push(format!("Target: {}", player.target));
    }
    ActionResult::message_only(player, messages)
}

fn class_list() -> Vec<String> {
    CharacterClass::all()
        .iter()
        .map(|class| format!("{class}: {}", class.blurb()))
        .collect()
}

pub fn class_options(player: Player) -> ActionResult {
    let mut messages = vec!["You can choose from the following classes:".to_string()];
    messages.extend(class_list());
    messages.push("Say, for example, select dreamer".to_string());
    ActionResult::message_only(player, messages)
}

/// Switch to the class named by `argument`.
pub fn change_class(player: Player, argument: &str) -> ActionResult {
    let class = match argument.parse::<CharacterClass>() {
        Ok(class) => class,
        Err(_) => {
            let mut messages = if argument.is_empty() {
                vec!["Which class? Say, for example, select dreamer".to_string()]
            } else {
                vec![format!("There is no class called {argument}.")]
            };
            messages.extend(class_list());
            return ActionResult::message_only(player, messages);
        }
    };

    if class == player.character_class {
        let message = format!("You are already a {class}.");
        return ActionResult::message_only(player, vec![message]);
    }

    tracing::info!(player = %player.name, from = %player.character_class, to = %class, "Changing class");
    let mut after = player.clone();
    after.character_class = class;
    ActionResult::changed(&player, after, vec![format!("You are now a {class}.")])
}

/// Guidance for text nothing matched.
pub fn unrecognized(player: Player, action_text: &str, set: &ActionSet) -> ActionResult {
    let text = action_text.trim();
    let mut messages = if text.is_empty() {
        vec!["You didn't say anything.".to_string()]
    } else {
        vec![format!("I don't know how to {text}.")]
    };
    let suggestions = set.suggestions();
    if !suggestions.is_empty() {
        messages.push(format!("Try one of: {}", suggestions.join(", ")));
    }
    ActionResult::message_only(player, messages)
}
