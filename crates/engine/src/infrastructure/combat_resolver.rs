//! HTTP client for the remote combat resolver.

use async_trait::async_trait;
use reqwest::Client;

use operator_domain::Player;
use operator_shared::{CombatInvocation, CombatReply};

use crate::infrastructure::ports::{CombatResolution, CombatResolverPort, ResolverError};

/// Default resolver endpoint.
pub const DEFAULT_RESOLVER_URL: &str = "http://localhost:9000/combat";

/// Posts both combatants to the resolver and waits for the outcome.
///
/// No timeout and no retry: a combat either resolves or fails the action.
#[derive(Clone)]
pub struct HttpCombatResolver {
    client: Client,
    url: String,
}

impl HttpCombatResolver {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for HttpCombatResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLVER_URL)
    }
}

/// Decode a resolver reply body into a resolution.
pub fn parse_resolution(bytes: &[u8]) -> Result<CombatResolution, ResolverError> {
    let (initiator, opponent, messages) = CombatReply::parse(bytes)
        .and_then(CombatReply::into_result)
        .and_then(|result| result.into_players())
        .map_err(|e| ResolverError::InvalidResponse(e.to_string()))?;

    Ok(CombatResolution {
        initiator,
        opponent,
        messages,
    })
}

#[async_trait]
impl CombatResolverPort for HttpCombatResolver {
    async fn resolve(
        &self,
        initiator: Player,
        opponent: Player,
    ) -> Result<CombatResolution, ResolverError> {
        let invocation = CombatInvocation::new(initiator, opponent);

        let response = self
            .client
            .post(&self.url)
            .json(&invocation)
            .send()
            .await
            .map_err(|e| ResolverError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .map_err(|e| ResolverError::RequestFailed(e.to_string()))?;
            return Err(ResolverError::RequestFailed(format!("{status}: {error_text}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ResolverError::RequestFailed(e.to_string()))?;

        parse_resolution(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn combatant(name: &str, hit_points: i32) -> serde_json::Value {
        serde_json::to_value(Player {
            hit_points,
            ..Player::new(name)
        })
        .expect("serialize")
    }

    #[test]
    fn parses_an_enveloped_resolution() {
        let result = json!({
            "Player1": combatant("truckthunders", 6),
            "Player2": combatant("Target Dummy", -1),
            "message": ["Critical hit!"]
        });
        let envelope = json!({ "statusCode": 200, "body": result.to_string() });

        let resolution =
            parse_resolution(envelope.to_string().as_bytes()).expect("valid resolution");

        assert_eq!(resolution.initiator.hit_points, 6);
        assert_eq!(resolution.opponent.hit_points, -1);
        assert_eq!(resolution.messages, vec!["Critical hit!".to_string()]);
    }

    #[test]
    fn garbage_is_an_invalid_response() {
        let err = parse_resolution(b"not json").expect_err("garbage");
        assert!(matches!(err, ResolverError::InvalidResponse(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let resolver = HttpCombatResolver::new("http://resolver.local/combat/");
        assert_eq!(resolver.url, "http://resolver.local/combat");
    }
}
