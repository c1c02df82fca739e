//! Field diffs between two player snapshots.
//!
//! A `PlayerDiff` is the unit of persistence: the store receives only the
//! fields that changed. Every field is `Option`; `None` means "leave as is".
//! Serialized, a diff is a JSON object holding just the changed fields, which
//! is the partial update the store expects.

use serde::{Deserialize, Serialize};

use crate::entities::Player;
use crate::value_objects::{CharacterClass, PlayerContext};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_class: Option<CharacterClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hit_points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ex: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit_points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ex: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_effects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<PlayerContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<String>>,
}

fn changed<T: PartialEq + Clone>(before: &T, after: &T) -> Option<T> {
    (before != after).then(|| after.clone())
}

impl PlayerDiff {
    /// Compare two snapshots field by field. Sequences compare element-wise.
    pub fn between(before: &Player, after: &Player) -> Self {
        Self {
            name: changed(&before.name, &after.name),
            character_class: changed(&before.character_class, &after.character_class),
            max_hit_points: changed(&before.max_hit_points, &after.max_hit_points),
            max_ex: changed(&before.max_ex, &after.max_ex),
            hit_points: changed(&before.hit_points, &after.hit_points),
            ex: changed(&before.ex, &after.ex),
            status_effects: changed(&before.status_effects, &after.status_effects),
            action: changed(&before.action, &after.action),
            enhanced: changed(&before.enhanced, &after.enhanced),
            auth_token: changed(&before.auth_token, &after.auth_token),
            context: changed(&before.context, &after.context),
            target: changed(&before.target, &after.target),
            history: changed(&before.history, &after.history),
        }
    }

    /// A diff that only records the raw command a player typed.
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the fields this diff touches, in declaration order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let flags = [
            ("name", self.name.is_some()),
            ("character_class", self.character_class.is_some()),
            ("max_hit_points", self.max_hit_points.is_some()),
            ("max_ex", self.max_ex.is_some()),
            ("hit_points", self.hit_points.is_some()),
            ("ex", self.ex.is_some()),
            ("status_effects", self.status_effects.is_some()),
            ("action", self.action.is_some()),
            ("enhanced", self.enhanced.is_some()),
            ("auth_token", self.auth_token.is_some()),
            ("context", self.context.is_some()),
            ("target", self.target.is_some()),
            ("history", self.history.is_some()),
        ];
        flags
            .into_iter()
            .filter_map(|(field, set)| set.then_some(field))
            .collect()
    }

    /// Overwrite `player`'s fields with every field present in this diff.
    pub fn apply(&self, player: &mut Player) {
        let diff = self.clone();
        if let Some(v) = diff.name {
            player.name = v;
        }
        if let Some(v) = diff.character_class {
            player.character_class = v;
        }
        if let Some(v) = diff.max_hit_points {
            player.max_hit_points = v;
        }
        if let Some(v) = diff.max_ex {
            player.max_ex = v;
        }
        if let Some(v) = diff.hit_points {
            player.hit_points = v;
        }
        if let Some(v) = diff.ex {
            player.ex = v;
        }
        if let Some(v) = diff.status_effects {
            player.status_effects = v;
        }
        if let Some(v) = diff.action {
            player.action = v;
        }
        if let Some(v) = diff.enhanced {
            player.enhanced = v;
        }
        if let Some(v) = diff.auth_token {
            player.auth_token = v;
        }
        if let Some(v) = diff.context {
            player.context = v;
        }
        if let Some(v) = diff.target {
            player.target = v;
        }
        if let Some(v) = diff.history {
            player.history = v;
        }
    }

    /// Non-mutating form of [`PlayerDiff::apply`].
    pub fn applied_to(&self, player: &Player) -> Player {
        let mut updated = player.clone();
        self.apply(&mut updated);
        updated
    }

    /// Layer `other` on top of this diff. Fields set in `other` win.
    pub fn merge(mut self, other: PlayerDiff) -> Self {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() { self.$field = other.$field; })*
            };
        }
        take!(
            name,
            character_class,
            max_hit_points,
            max_ex,
            hit_points,
            ex,
            status_effects,
            action,
            enhanced,
            auth_token,
            context,
            target,
            history
        );
        self
    }

    // =========================================================================
    // Death reset
    // =========================================================================

    /// Force the revive fields: full hit points, no ex, no status effects.
    ///
    /// Written unconditionally, even where a field already holds that value.
    pub fn revive(&mut self, max_hit_points: i32) {
        self.hit_points = Some(max_hit_points);
        self.ex = Some(0);
        self.status_effects = Some(Vec::new());
    }

    /// Force the loser's trip home: home context, no target.
    pub fn send_home(&mut self) {
        self.context = Some(PlayerContext::Home);
        self.target = Some(String::new());
    }
}
