// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Catalog Pick and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Namespace assumed when a location string carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Canonical `namespace:path` identifier of a registered entry.
///
/// Namespaces accept `[a-z0-9_.-]`, paths additionally accept `/`. Both halves are stored as
/// `SmolStr` since nearly every id fits inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    namespace: SmolStr,
    path: SmolStr,
}

impl Location {
    pub fn new(namespace: &str, path: &str) -> Result<Self, LocationError> {
        let namespace = if namespace.is_empty() { DEFAULT_NAMESPACE } else { namespace };
        if path.is_empty() {
            return Err(LocationError::MissingPath);
        }
        if let Some(ch) = namespace.chars().find(|&ch| !is_namespace_char(ch)) {
            return Err(LocationError::InvalidNamespace(ch));
        }
        if let Some(ch) = path.chars().find(|&ch| !is_path_char(ch)) {
            return Err(LocationError::InvalidPath(ch));
        }
        Ok(Self { namespace: SmolStr::new(namespace), path: SmolStr::new(path) })
    }

    pub fn parse(input: &str) -> Result<Self, LocationError> {
        if input.is_empty() {
            return Err(LocationError::Empty);
        }
        match input.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, input),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Same namespace, different path.
    pub fn with_path(&self, path: &str) -> Result<Self, LocationError> {
        Self::new(&self.namespace, path)
    }
}

fn is_namespace_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(ch: char) -> bool {
    is_namespace_char(ch) || ch == '/'
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Location {
    type Error = LocationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// A catalog-reported id string that is not a valid canonical location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    Empty,
    MissingPath,
    InvalidNamespace(char),
    InvalidPath(char),
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("location must not be empty"),
            Self::MissingPath => f.write_str("location must have a non-empty path"),
            Self::InvalidNamespace(ch) => write!(f, "invalid character {ch:?} in namespace"),
            Self::InvalidPath(ch) => write!(f, "invalid character {ch:?} in path"),
        }
    }
}

impl std::error::Error for LocationError {}
