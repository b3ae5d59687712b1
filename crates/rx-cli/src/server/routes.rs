//! Request routing for `rxc serve`.
//!
//! [`App`] is transport-free: it takes a method, path, `Authorization` header
//! and body and returns a [`Reply`]. Per-login state (selection and last
//! results) lives in a map keyed by bearer token and owned by the app.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use rx_auth::{AuthError, CredentialSet};
use rx_core::export::to_csv;
use rx_core::graph::InteractionGraph;
use rx_core::responses::DrugListResponse;
use rx_core::{FactStore, InteractionReport, KNOWN_DRUGS, MatchResult};
use serde::{Deserialize, Serialize};

const NOT_LOGGED_IN: &str = "not logged in";

/// Sessions untouched for this long are dropped.
const SESSION_IDLE_MINUTES: i64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Route {
    Drugs,
    Login,
    Check,
    Clear,
    ResultsCsv,
    Graph,
    Session,
    Logout,
}

impl Route {
    fn resolve(method: Method, path: &str) -> Result<Self, u16> {
        let route = match path {
            "/drugs" => (Method::Get, Self::Drugs),
            "/login" => (Method::Post, Self::Login),
            "/check" => (Method::Post, Self::Check),
            "/clear" => (Method::Post, Self::Clear),
            "/results.csv" => (Method::Get, Self::ResultsCsv),
            "/graph" => (Method::Get, Self::Graph),
            "/session" => (Method::Get, Self::Session),
            "/logout" => (Method::Post, Self::Logout),
            _ => return Err(404),
        };
        if route.0 == method { Ok(route.1) } else { Err(405) }
    }

    const fn is_gated(self) -> bool {
        !matches!(self, Self::Drugs | Self::Login)
    }
}

/// A response ready to be written by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    /// Suggested download file name.
    pub attachment: Option<String>,
}

impl Reply {
    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: "application/json",
                body,
                attachment: None,
            },
            Err(error) => Self::error(500, &format!("failed to encode response: {error}")),
        }
    }

    pub(super) fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: serde_json::json!({ "error": message }).to_string(),
            attachment: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Default, Deserialize)]
struct CheckRequest {
    #[serde(default)]
    drugs: Vec<String>,
}

#[derive(Serialize)]
struct LoginReply<'a> {
    token: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct CheckReply<'a> {
    #[serde(flatten)]
    report: &'a InteractionReport,
    /// One spoken sentence per result row.
    announcements: Vec<String>,
}

#[derive(Serialize)]
struct ClearedReply {
    cleared: bool,
}

/// What one logged-in client has selected and last checked.
#[derive(Debug, Default, Serialize)]
struct SessionState {
    email: String,
    selection: Vec<String>,
    results: Option<Vec<MatchResult>>,
    #[serde(skip)]
    last_seen: DateTime<Utc>,
}

pub struct App {
    store: &'static FactStore,
    credentials: CredentialSet,
    export_file_name: String,
    idle_limit: TimeDelta,
    sessions: HashMap<String, SessionState>,
}

impl App {
    #[must_use]
    pub fn new(
        store: &'static FactStore,
        credentials: CredentialSet,
        export_file_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            credentials,
            export_file_name: export_file_name.into(),
            idle_limit: TimeDelta::minutes(SESSION_IDLE_MINUTES),
            sessions: HashMap::new(),
        }
    }

    /// Route one request. `url` may carry a query string; it is ignored.
    pub fn handle(
        &mut self,
        method: Method,
        url: &str,
        authorization: Option<&str>,
        body: &str,
    ) -> Reply {
        let now = Utc::now();
        self.expire_idle(now);

        let path = url.split('?').next().unwrap_or(url);
        let route = match Route::resolve(method, path) {
            Ok(route) => route,
            Err(404) => return Reply::error(404, "not found"),
            Err(status) => return Reply::error(status, "method not allowed"),
        };

        if !route.is_gated() {
            return match route {
                Route::Login => self.login(body),
                _ => Reply::json(200, &DrugListResponse::from_vocabulary(KNOWN_DRUGS)),
            };
        }

        let Some(token) = bearer_token(authorization) else {
            return Reply::error(401, NOT_LOGGED_IN);
        };
        let Some(state) = self.sessions.get_mut(token) else {
            return Reply::error(401, NOT_LOGGED_IN);
        };
        state.last_seen = now;

        match route {
            Route::Check => self.check(token, body),
            Route::Clear => self.clear(token),
            Route::ResultsCsv => self.results_csv(token),
            Route::Graph => self.graph(token),
            Route::Session => Reply::json(200, &self.sessions.get(token)),
            Route::Logout => {
                let removed = self.sessions.remove(token);
                if let Some(state) = &removed {
                    tracing::info!(email = %state.email, "logged out");
                }
                Reply::json(200, &ClearedReply { cleared: removed.is_some() })
            }
            Route::Drugs | Route::Login => Reply::error(500, "unreachable route"),
        }
    }

    /// Number of live sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Drop sessions idle for longer than the limit.
    fn expire_idle(&mut self, now: DateTime<Utc>) {
        let limit = self.idle_limit;
        let before = self.sessions.len();
        self.sessions.retain(|_, state| now - state.last_seen < limit);
        let expired = before - self.sessions.len();
        if expired > 0 {
            tracing::info!(expired, "idle sessions expired");
        }
    }

    fn login(&mut self, body: &str) -> Reply {
        let request: LoginRequest = match parse_body(body) {
            Ok(request) => request,
            Err(reply) => return reply,
        };

        match rx_auth::login(&self.credentials, &request.email, &request.password) {
            Ok(session) => {
                let reply = Reply::json(
                    200,
                    &LoginReply {
                        token: &session.token,
                        email: &session.email,
                    },
                );
                self.sessions.insert(
                    session.token,
                    SessionState {
                        email: session.email,
                        last_seen: session.logged_in_at,
                        ..SessionState::default()
                    },
                );
                reply
            }
            Err(AuthError::Login(reason)) => {
                tracing::info!(%reason, "login refused");
                Reply::error(401, &reason.to_string())
            }
            Err(error) => {
                tracing::error!(%error, "login failed");
                Reply::error(500, &error.to_string())
            }
        }
    }

    fn check(&mut self, token: &str, body: &str) -> Reply {
        let request: CheckRequest = match parse_body(body) {
            Ok(request) => request,
            Err(reply) => return reply,
        };
        let Some(state) = self.sessions.get_mut(token) else {
            return Reply::error(401, NOT_LOGGED_IN);
        };

        let report = InteractionReport::check(self.store, &request.drugs);
        state.selection.clone_from(&report.selection);
        // A refused selection stores an empty result set.
        state.results = Some(report.results.clone());
        tracing::debug!(email = %state.email, rows = report.results.len(), "check handled");

        let announcements = report
            .results
            .iter()
            .map(MatchResult::announcement)
            .collect();
        Reply::json(
            200,
            &CheckReply {
                report: &report,
                announcements,
            },
        )
    }

    fn clear(&mut self, token: &str) -> Reply {
        let cleared = self.sessions.get_mut(token).is_some_and(|state| {
            state.selection.clear();
            state.results = None;
            true
        });
        Reply::json(200, &ClearedReply { cleared })
    }

    fn results_csv(&self, token: &str) -> Reply {
        let Some(results) = self.sessions.get(token).and_then(|state| state.results.as_ref()) else {
            return Reply::error(404, "no results; run a check first");
        };
        match to_csv(results) {
            Ok(body) => Reply {
                status: 200,
                content_type: "text/csv; charset=utf-8",
                body,
                attachment: Some(self.export_file_name.clone()),
            },
            Err(error) => Reply::error(500, &error.to_string()),
        }
    }

    fn graph(&self, token: &str) -> Reply {
        let results = self
            .sessions
            .get(token)
            .and_then(|state| state.results.as_deref())
            .unwrap_or_default();
        Reply::json(200, &InteractionGraph::from_results(results))
    }
}

fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Decode a JSON body; an empty body means "all defaults".
fn parse_body<T: Default + for<'de> Deserialize<'de>>(body: &str) -> Result<T, Reply> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|error| Reply::error(400, &format!("invalid JSON body: {error}")))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, Utc};
    use pretty_assertions::assert_eq;
    use rx_auth::CredentialSet;
    use rx_core::FactStore;
    use serde_json::Value;

    use super::{App, Method, Reply};

    const EMAIL: &str = "nurse@example.com";
    const PASSWORD: &str = "s3cret";

    fn app() -> App {
        App::new(
            FactStore::global(),
            CredentialSet::from_lists("nurse@example.com, pharmacist@example.com", "s3cret, 1234"),
            "drug_interactions.csv",
        )
    }

    fn json(reply: &Reply) -> Value {
        serde_json::from_str(&reply.body).expect("reply body should be JSON")
    }

    fn login(app: &mut App, email: &str, password: &str) -> String {
        let body = serde_json::json!({ "email": email, "password": password }).to_string();
        let reply = app.handle(Method::Post, "/login", None, &body);
        assert_eq!(reply.status, 200, "login failed: {}", reply.body);
        json(&reply)["token"].as_str().expect("token").to_string()
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }

    #[test]
    fn drug_list_is_public() {
        let reply = app().handle(Method::Get, "/drugs?sort=asc", None, "");
        assert_eq!(reply.status, 200);
        let body = json(&reply);
        assert_eq!(body["total"], 79);
        assert_eq!(body["drugs"][0], "allopurinol");
    }

    #[test]
    fn gated_routes_require_a_live_token() {
        let mut app = app();
        for (method, path) in [
            (Method::Post, "/check"),
            (Method::Post, "/clear"),
            (Method::Get, "/results.csv"),
            (Method::Get, "/graph"),
            (Method::Get, "/session"),
            (Method::Post, "/logout"),
        ] {
            assert_eq!(app.handle(method, path, None, "").status, 401, "{path}");
            assert_eq!(
                app.handle(method, path, Some("Bearer not-a-token"), "").status,
                401,
                "{path}"
            );
        }
    }

    #[test]
    fn login_rejections_carry_the_user_message() {
        let mut app = app();
        let cases = [
            (r#"{}"#, "Both email and password fields must be filled!"),
            (r#"{"password":"x"}"#, "Please enter an email address."),
            (r#"{"email":"nurse@example.com"}"#, "Please enter a password."),
            (
                r#"{"email":"nurse","password":"x"}"#,
                "Please enter a valid email address (e.g., example@gmail.com).",
            ),
            (r#"{"email":"other@example.com","password":"x"}"#, "Invalid email address"),
            (r#"{"email":"nurse@example.com","password":"1234"}"#, "Invalid credentials"),
        ];
        for (body, message) in cases {
            let reply = app.handle(Method::Post, "/login", None, body);
            assert_eq!(reply.status, 401, "{body}");
            assert_eq!(json(&reply)["error"], message);
        }
        assert_eq!(app.session_count(), 0);
    }

    #[test]
    fn malformed_login_body_is_bad_request() {
        let reply = app().handle(Method::Post, "/login", None, "{not json");
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn check_then_download_csv() {
        let mut app = app();
        let token = login(&mut app, EMAIL, PASSWORD);
        let auth = bearer(&token);

        let before = app.handle(Method::Get, "/results.csv", Some(&auth), "");
        assert_eq!(before.status, 404);

        let reply = app.handle(
            Method::Post,
            "/check",
            Some(&auth),
            r#"{"drugs":["Warfarin","Aspirin","Paracetamol"]}"#,
        );
        assert_eq!(reply.status, 200);
        let body = json(&reply);
        assert_eq!(body["pairs_checked"], 3);
        assert_eq!(body["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(
            body["announcements"][0],
            "Warning: Increased risk of bleeding. Recommendation: Monitor INR and avoid concurrent use unless necessary."
        );

        let csv = app.handle(Method::Get, "/results.csv", Some(&auth), "");
        assert_eq!(csv.status, 200);
        assert_eq!(csv.content_type, "text/csv; charset=utf-8");
        assert_eq!(csv.attachment.as_deref(), Some("drug_interactions.csv"));
        let mut lines = csv.body.lines();
        assert_eq!(lines.next(), Some("Drug 1,Drug 2,Severity,Risk,Recommendation"));
        assert!(lines.next().is_some_and(|line| line.starts_with("Warfarin,Aspirin,high,")));
    }

    #[test]
    fn short_selection_warns_and_empties_results() {
        let mut app = app();
        let auth = bearer(&login(&mut app, EMAIL, PASSWORD));

        app.handle(Method::Post, "/check", Some(&auth), r#"{"drugs":["warfarin","aspirin"]}"#);
        let reply = app.handle(Method::Post, "/check", Some(&auth), r#"{"drugs":["paracetamol"]}"#);
        assert_eq!(reply.status, 200);
        assert_eq!(json(&reply)["warning"], "Please select at least two drugs.");

        let state = json(&app.handle(Method::Get, "/session", Some(&auth), ""));
        assert_eq!(state["selection"], serde_json::json!(["paracetamol"]));
        assert_eq!(state["results"], serde_json::json!([]));

        let csv = app.handle(Method::Get, "/results.csv", Some(&auth), "");
        assert_eq!(csv.status, 200);
        assert_eq!(csv.body, "Drug 1,Drug 2,Severity,Risk,Recommendation\n");

        let graph = json(&app.handle(Method::Get, "/graph", Some(&auth), ""));
        assert_eq!(graph["edges"], serde_json::json!([]));
    }

    #[test]
    fn clear_resets_selection_and_results() {
        let mut app = app();
        let auth = bearer(&login(&mut app, EMAIL, PASSWORD));
        app.handle(Method::Post, "/check", Some(&auth), r#"{"drugs":["warfarin","aspirin"]}"#);

        let reply = app.handle(Method::Post, "/clear", Some(&auth), "");
        assert_eq!(json(&reply)["cleared"], true);

        let state = json(&app.handle(Method::Get, "/session", Some(&auth), ""));
        assert_eq!(state["selection"], serde_json::json!([]));
        assert_eq!(state["results"], Value::Null);
        assert_eq!(app.handle(Method::Get, "/results.csv", Some(&auth), "").status, 404);
    }

    #[test]
    fn graph_reflects_last_results() {
        let mut app = app();
        let auth = bearer(&login(&mut app, EMAIL, PASSWORD));

        let empty = json(&app.handle(Method::Get, "/graph", Some(&auth), ""));
        assert_eq!(empty["nodes"], serde_json::json!([]));

        app.handle(Method::Post, "/check", Some(&auth), r#"{"drugs":["warfarin","aspirin"]}"#);
        let graph = json(&app.handle(Method::Get, "/graph", Some(&auth), ""));
        assert_eq!(graph["edges"][0]["color"], "red");
        assert_eq!(graph["nodes"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn sessions_are_isolated_per_token() {
        let mut app = app();
        let nurse = bearer(&login(&mut app, EMAIL, PASSWORD));
        let pharmacist = bearer(&login(&mut app, "pharmacist@example.com", "1234"));
        assert_eq!(app.session_count(), 2);

        app.handle(Method::Post, "/check", Some(&nurse), r#"{"drugs":["warfarin","aspirin"]}"#);
        assert_eq!(app.handle(Method::Get, "/results.csv", Some(&nurse), "").status, 200);
        assert_eq!(app.handle(Method::Get, "/results.csv", Some(&pharmacist), "").status, 404);
    }

    #[test]
    fn logout_revokes_the_token() {
        let mut app = app();
        let auth = bearer(&login(&mut app, EMAIL, PASSWORD));
        let reply = app.handle(Method::Post, "/logout", Some(&auth), "");
        assert_eq!(json(&reply)["cleared"], true);
        assert_eq!(app.handle(Method::Get, "/session", Some(&auth), "").status, 401);
        assert_eq!(app.session_count(), 0);
    }

    #[test]
    fn idle_sessions_expire() {
        let mut app = app();
        let auth = bearer(&login(&mut app, EMAIL, PASSWORD));

        app.expire_idle(Utc::now() + TimeDelta::minutes(10));
        assert_eq!(app.session_count(), 1);

        app.expire_idle(Utc::now() + TimeDelta::minutes(31));
        assert_eq!(app.session_count(), 0);
        assert_eq!(app.handle(Method::Get, "/session", Some(&auth), "").status, 401);
    }

    #[test]
    fn activity_keeps_a_session_alive() {
        let mut app = app();
        let auth = bearer(&login(&mut app, EMAIL, PASSWORD));
        for state in app.sessions.values_mut() {
            state.last_seen = Utc::now() - TimeDelta::minutes(29);
        }

        assert_eq!(app.handle(Method::Get, "/session", Some(&auth), "").status, 200);
        app.expire_idle(Utc::now() + TimeDelta::minutes(5));
        assert_eq!(app.session_count(), 1);
    }

    #[test]
    fn unknown_paths_and_wrong_methods() {
        let mut app = app();
        assert_eq!(app.handle(Method::Get, "/nope", None, "").status, 404);
        assert_eq!(app.handle(Method::Get, "/login", None, "").status, 405);
        assert_eq!(app.handle(Method::Other, "/drugs", None, "").status, 405);
    }
}
