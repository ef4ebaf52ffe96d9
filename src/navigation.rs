// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Named routes and the authentication guard that runs before every
//! navigation.

use crate::error::{ClientError, Result};
use crate::token_cache::TokenCache;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

pub const HOME: &str = "home";
pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const TRAINING_PLAN: &str = "training_plan";
pub const CREATE_TRAINING_PLAN: &str = "create_training_plan";
pub const EDIT_TRAINING_PLAN: &str = "edit_training_plan";
pub const EDIT_TRAINING_SESSION: &str = "edit_training_session";
pub const CREATE_TRAINING_SESSION: &str = "create_training_session";
pub const REPORT: &str = "report";

/// Redirects followed by a single `push` before giving up.
const MAX_REDIRECTS: usize = 3;

/// A route declaration. Child paths without a leading `/` are relative to
/// the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: String,
    pub path: String,
    pub requires_auth: bool,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            requires_auth: false,
            children: Vec::new(),
        }
    }

    /// Mark the route (and so everything nested under it) as protected.
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn child(mut self, record: RouteRecord) -> Self {
        self.children.push(record);
        self
    }
}

/// The application's route table.
pub fn default_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord::new(HOME, "/").requires_auth(),
        RouteRecord::new(LOGIN, "/login"),
        RouteRecord::new(REGISTER, "/register"),
        RouteRecord::new(TRAINING_PLAN, "/training_plan"),
        RouteRecord::new(CREATE_TRAINING_PLAN, "/create_training_plan"),
        RouteRecord::new(EDIT_TRAINING_PLAN, "/edit_training_plan/:id"),
        RouteRecord::new(EDIT_TRAINING_SESSION, "/edit_training_session/:id"),
        RouteRecord::new(CREATE_TRAINING_SESSION, "/create_training_session/:id"),
        RouteRecord::new(REPORT, "/report"),
    ]
}

/// Navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Named {
        name: String,
        params: BTreeMap<String, String>,
    },
    Path(String),
}

impl Location {
    pub fn name(name: &str) -> Self {
        Location::Named {
            name: name.to_string(),
            params: BTreeMap::new(),
        }
    }

    pub fn path(path: &str) -> Self {
        Location::Path(path.to_string())
    }

    /// Add a path parameter. No effect on path locations.
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        if let Location::Named { params, .. } = &mut self {
            params.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::path(path)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Named { name, .. } => write!(f, "route '{}'", name),
            Location::Path(path) => write!(f, "path '{}'", path),
        }
    }
}

/// A resolved location: the chain of matched records (outermost first),
/// the concrete path and any extracted parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub matched: Vec<RouteRecord>,
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    /// Name of the innermost matched record.
    pub fn name(&self) -> &str {
        self.matched.last().map(|r| r.name.as_str()).unwrap_or_default()
    }

    /// True if any record in the chain is protected.
    pub fn requires_auth(&self) -> bool {
        self.matched.iter().any(|r| r.requires_auth)
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Outcome of the navigation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Authentication guard.
///
/// Protected routes need a token; login and registration are skipped once
/// a token exists.
pub fn guard(target: &RouteMatch, has_token: bool) -> GuardDecision {
    if target.requires_auth() && !has_token {
        return GuardDecision::Redirect(LOGIN);
    }

    if matches!(target.name(), LOGIN | REGISTER) && has_token {
        return GuardDecision::Redirect(HOME);
    }

    GuardDecision::Allow
}

#[derive(Default)]
struct NavState {
    current: Option<RouteMatch>,
    history: Vec<RouteMatch>,
}

/// Route table plus the current location.
///
/// Token presence is read from the token cache at each navigation, so the
/// guard always sees the persisted session state.
pub struct Router {
    routes: Vec<RouteRecord>,
    tokens: Arc<dyn TokenCache>,
    state: Mutex<NavState>,
}

impl Router {
    pub fn new(routes: Vec<RouteRecord>, tokens: Arc<dyn TokenCache>) -> Self {
        Self {
            routes,
            tokens,
            state: Mutex::new(NavState::default()),
        }
    }

    pub fn with_default_routes(tokens: Arc<dyn TokenCache>) -> Self {
        Self::new(default_routes(), tokens)
    }

    /// Resolve a location against the route table.
    pub fn resolve(&self, location: &Location) -> Option<RouteMatch> {
        match location {
            Location::Named { name, params } => {
                let mut chain = Vec::new();
                find_named(&self.routes, name, &mut chain)?;
                let pattern = chain_pattern(&chain);
                let path = fill_pattern(&pattern, params)?;
                Some(RouteMatch {
                    matched: chain.into_iter().cloned().collect(),
                    path,
                    params: params.clone(),
                })
            }
            Location::Path(raw) => {
                let path = raw.split(['?', '#']).next().unwrap_or_default();
                let segments = split_segments(path);
                let mut chain = Vec::new();
                let params = match_path(&self.routes, &[], &segments, &mut chain)?;
                Some(RouteMatch {
                    matched: chain.into_iter().cloned().collect(),
                    path: format!("/{}", segments.join("/")),
                    params,
                })
            }
        }
    }

    /// Navigate to `location`, applying the guard first.
    ///
    /// Returns the route that actually became current, which differs from
    /// the request when the guard redirected.
    pub fn push(&self, location: impl Into<Location>) -> Result<RouteMatch> {
        let requested = location.into();
        let mut target = self
            .resolve(&requested)
            .ok_or_else(|| ClientError::RouteNotFound(requested.to_string()))?;

        let has_token = self.tokens.get().is_some();
        let mut redirects = 0;

        while let GuardDecision::Redirect(name) = guard(&target, has_token) {
            redirects += 1;
            if redirects > MAX_REDIRECTS {
                return Err(ClientError::RedirectLoop(requested.to_string()));
            }
            tracing::info!(from = target.name(), to = name, "Navigation redirected");
            let next = Location::name(name);
            target = self
                .resolve(&next)
                .ok_or_else(|| ClientError::RouteNotFound(next.to_string()))?;
        }

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current = Some(target.clone());
        state.history.push(target.clone());
        tracing::debug!(route = target.name(), path = %target.path, "Navigated");

        Ok(target)
    }

    pub fn current(&self) -> Option<RouteMatch> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current.clone()
    }

    pub fn current_name(&self) -> Option<String> {
        self.current().map(|m| m.name().to_string())
    }

    /// Every route that became current, oldest first.
    pub fn history(&self) -> Vec<RouteMatch> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.history.clone()
    }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn join_pattern<'a>(prefix: &[&'a str], path: &'a str) -> Vec<&'a str> {
    if path.starts_with('/') {
        split_segments(path)
    } else {
        let mut full = prefix.to_vec();
        full.extend(split_segments(path));
        full
    }
}

fn chain_pattern(chain: &[&RouteRecord]) -> Vec<String> {
    let mut pattern: Vec<&str> = Vec::new();
    for record in chain {
        pattern = join_pattern(&pattern, &record.path);
    }
    pattern.into_iter().map(str::to_string).collect()
}

fn fill_pattern(pattern: &[String], params: &BTreeMap<String, String>) -> Option<String> {
    let mut segments = Vec::with_capacity(pattern.len());
    for segment in pattern {
        match segment.strip_prefix(':') {
            Some(key) => segments.push(urlencoding::encode(params.get(key)?).into_owned()),
            None => segments.push(segment.clone()),
        }
    }
    Some(format!("/{}", segments.join("/")))
}

fn find_named<'a>(
    records: &'a [RouteRecord],
    name: &str,
    chain: &mut Vec<&'a RouteRecord>,
) -> Option<()> {
    for record in records {
        chain.push(record);
        if record.name == name || find_named(&record.children, name, chain).is_some() {
            return Some(());
        }
        chain.pop();
    }
    None
}

fn match_segments(pattern: &[&str], segments: &[&str]) -> Option<BTreeMap<String, String>> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (p, s) in pattern.iter().zip(segments) {
        match p.strip_prefix(':') {
            Some(key) => {
                let value = urlencoding::decode(s).ok()?;
                params.insert(key.to_string(), value.into_owned());
            }
            None if p == s => {}
            None => return None,
        }
    }
    Some(params)
}

fn match_path<'a>(
    records: &'a [RouteRecord],
    prefix: &[&'a str],
    segments: &[&str],
    chain: &mut Vec<&'a RouteRecord>,
) -> Option<BTreeMap<String, String>> {
    for record in records {
        let pattern = join_pattern(prefix, &record.path);
        chain.push(record);

        if let Some(params) = match_path(&record.children, &pattern, segments, chain) {
            return Some(params);
        }
        if let Some(params) = match_segments(&pattern, segments) {
            return Some(params);
        }

        chain.pop();
    }
    None
}
