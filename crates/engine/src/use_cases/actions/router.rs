//! Context-sensitive action routing.
//!
//! An [`ActionSet`] is an ordered stack of layers. Lookup walks the layers
//! from the most specific (the context's own layer) to the least specific
//! (the common layer), so a context key shadows a common key with the same
//! text. Layers are built once per action and never mutated.

use std::collections::{BTreeMap, BTreeSet};

use operator_domain::PlayerContext;

/// What a routed command does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionHandler {
    // Common
    GetInfo,
    ClassOptions,
    ChangeClass,
    // Home
    WhichGame,
    PlayTextAdventure,
    StartCombat,
    DescribeHome,
    QuitMessage,
    // Combat
    ResolveCombat,
    Flee,
    // Text adventure
    GameCommand,
    /// Echoes guidance, changes nothing.
    Unrecognized,
}

const COMMON_ACTIONS: &[(&str, ActionHandler)] = &[
    ("get info", ActionHandler::GetInfo),
    ("info", ActionHandler::GetInfo),
    ("stats", ActionHandler::GetInfo),
    ("class options", ActionHandler::ClassOptions),
    ("classes", ActionHandler::ClassOptions),
    ("list classes", ActionHandler::ClassOptions),
    ("select", ActionHandler::ChangeClass),
    ("change class", ActionHandler::ChangeClass),
];

const HOME_ACTIONS: &[(&str, ActionHandler)] = &[
    ("play", ActionHandler::WhichGame),
    ("play a game", ActionHandler::WhichGame),
    ("play text adventure", ActionHandler::WhichGame),
    ("attack", ActionHandler::StartCombat),
    ("block", ActionHandler::StartCombat),
    ("dodge", ActionHandler::StartCombat),
    ("disrupt", ActionHandler::StartCombat),
    ("area", ActionHandler::StartCombat),
    ("fight", ActionHandler::StartCombat),
    ("combat", ActionHandler::StartCombat),
    ("look", ActionHandler::DescribeHome),
    ("look around", ActionHandler::DescribeHome),
    ("explore", ActionHandler::DescribeHome),
    ("quit", ActionHandler::QuitMessage),
];

const COMBAT_ACTIONS: &[(&str, ActionHandler)] = &[
    ("attack", ActionHandler::ResolveCombat),
    ("area", ActionHandler::ResolveCombat),
    ("block", ActionHandler::ResolveCombat),
    ("disrupt", ActionHandler::ResolveCombat),
    ("dodge", ActionHandler::ResolveCombat),
    ("run", ActionHandler::Flee),
    ("run away", ActionHandler::Flee),
    ("flee", ActionHandler::Flee),
    ("escape", ActionHandler::Flee),
    ("quit", ActionHandler::Flee),
];

/// One named mapping from command text to handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLayer {
    name: &'static str,
    entries: BTreeMap<String, ActionHandler>,
}

impl ActionLayer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: BTreeMap::new(),
        }
    }

    pub fn from_pairs(name: &'static str, pairs: &[(&str, ActionHandler)]) -> Self {
        let mut layer = Self::new(name);
        for (key, handler) in pairs {
            layer = layer.with(*key, *handler);
        }
        layer
    }

    pub fn with(mut self, key: impl Into<String>, handler: ActionHandler) -> Self {
        self.entries.insert(key.into(), handler);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, key: &str) -> Option<ActionHandler> {
        self.entries.get(key).copied()
    }
}

/// The commands legal in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet {
    /// Most specific first.
    layers: Vec<ActionLayer>,
    /// Used when nothing matches.
    fallback: ActionHandler,
}

impl ActionSet {
    /// Stack `layers`, most specific first.
    pub fn layered(layers: Vec<ActionLayer>, fallback: ActionHandler) -> Self {
        Self { layers, fallback }
    }

    pub fn fallback(&self) -> ActionHandler {
        self.fallback
    }

    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(ActionLayer::name).collect()
    }

    /// Exact, case-sensitive lookup honouring layer precedence.
    pub fn get(&self, key: &str) -> Option<ActionHandler> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Every key across all layers, sorted.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.layers
            .iter()
            .flat_map(|layer| layer.entries.keys().map(String::as_str))
            .collect()
    }

    /// The flattened mapping after overrides are applied.
    pub fn resolved(&self) -> BTreeMap<&str, ActionHandler> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.get(key).map(|handler| (key, handler)))
            .collect()
    }

    /// Keys worth suggesting to a lost player: everything except game titles.
    pub fn suggestions(&self) -> Vec<&str> {
        self.resolved()
            .into_iter()
            .filter(|(_, handler)| *handler != ActionHandler::PlayTextAdventure)
            .map(|(key, _)| key)
            .collect()
    }
}

/// Build the action set for `context`.
///
/// Home and combat stack their own layer over the common layer. A text
/// adventure gets no keys at all: every command goes to the interpreter.
/// `game_titles` become home keys that start the named game.
pub fn build_action_set(context: PlayerContext, game_titles: &[String]) -> ActionSet {
    let common = ActionLayer::from_pairs("common", COMMON_ACTIONS);
    match context {
        PlayerContext::Home => {
            let mut home = ActionLayer::from_pairs("home", HOME_ACTIONS);
            for title in game_titles {
                home = home.with(title.clone(), ActionHandler::PlayTextAdventure);
            }
            ActionSet::layered(vec![home, common], ActionHandler::Unrecognized)
        }
        PlayerContext::Combat => ActionSet::layered(
            vec![ActionLayer::from_pairs("combat", COMBAT_ACTIONS), common],
            ActionHandler::Unrecognized,
        ),
        PlayerContext::TextAdventure => ActionSet::layered(
            vec![ActionLayer::new("text_adventure")],
            ActionHandler::GameCommand,
        ),
    }
}

/// A routed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// The key that matched, `None` when the fallback was used.
    pub key: Option<String>,
    pub handler: ActionHandler,
    /// Text after a prefix key (`select dreamer` → `dreamer`). Empty on exact matches.
    pub argument: String,
}

impl Route {
    fn matched(key: &str, handler: ActionHandler, argument: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            handler,
            argument: argument.trim().to_string(),
        }
    }

    fn fallback(handler: ActionHandler) -> Self {
        Self {
            key: None,
            handler,
            argument: String::new(),
        }
    }
}

/// Resolve `action_text` against `set`.
///
/// 1. Exact, case-sensitive key lookup.
/// 2. Prefix match: the longest key followed by a space starts the text, and
///    the rest becomes the route's argument.
/// 3. The set's fallback. Never fails.
///
/// Blank text always gets the guidance handler.
pub fn route(action_text: &str, set: &ActionSet) -> Route {
    let text = action_text.trim();
    if text.is_empty() {
        return Route::fallback(ActionHandler::Unrecognized);
    }

    if let Some(handler) = set.get(text) {
        return Route::matched(text, handler, "");
    }

    let prefix = set
        .keys()
        .into_iter()
        .filter(|key| {
            text.strip_prefix(key)
                .is_some_and(|rest| rest.starts_with(' '))
        })
        .max_by_key(|key| key.len());

    if let Some(key) = prefix {
        if let Some(handler) = set.get(key) {
            return Route::matched(key, handler, &text[key.len()..]);
        }
    }

    Route::fallback(set.fallback())
}
