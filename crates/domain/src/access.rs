use std::str::FromStr;

use dealerdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Outcome applied when an access context carries no allow-list.
///
/// Upstream permission sources omit the list when they have no restriction
/// metadata for a dealer. `AllowAll` treats that as unrestricted, `DenyAll`
/// hides every field until a list is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAllowListPolicy {
    /// Every field is accessible.
    #[default]
    AllowAll,
    /// No field is accessible.
    DenyAll,
}

impl MissingAllowListPolicy {
    /// Returns stable configuration value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllowAll => "allow_all",
            Self::DenyAll => "deny_all",
        }
    }
}

impl FromStr for MissingAllowListPolicy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "allow_all" => Ok(Self::AllowAll),
            "deny_all" => Ok(Self::DenyAll),
            _ => Err(AppError::Validation(format!(
                "missing allow-list policy must be 'allow_all' or 'deny_all', got '{value}'"
            ))),
        }
    }
}

/// Per-render access input: an optional allow-list and a master switch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccessContext {
    allowed_fields: Option<Vec<String>>,
    enabled: bool,
}

impl AccessContext {
    /// Creates an access context from caller-supplied values.
    #[must_use]
    pub fn new(allowed_fields: Option<Vec<String>>, enabled: bool) -> Self {
        Self {
            allowed_fields,
            enabled,
        }
    }

    /// Creates a context that grants nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(None, false)
    }

    /// Returns the allow-list, if one was supplied.
    #[must_use]
    pub fn allowed_fields(&self) -> Option<&[String]> {
        self.allowed_fields.as_deref()
    }

    /// Returns whether access is switched on at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Field-level access predicate over one [`AccessContext`].
///
/// Read and update access each get their own resolver so the two permission
/// sources never influence each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessResolver {
    context: AccessContext,
    policy: MissingAllowListPolicy,
}

impl FieldAccessResolver {
    /// Creates a resolver for a context under the given missing-list policy.
    #[must_use]
    pub fn new(context: AccessContext, policy: MissingAllowListPolicy) -> Self {
        Self { context, policy }
    }

    /// Returns the underlying context.
    #[must_use]
    pub fn context(&self) -> &AccessContext {
        &self.context
    }

    /// Returns the policy applied when no allow-list is present.
    #[must_use]
    pub fn policy(&self) -> MissingAllowListPolicy {
        self.policy
    }

    /// Returns whether the context is switched on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.context.enabled
    }

    /// Returns whether `field_name` is accessible.
    ///
    /// A disabled context denies everything. Without an allow-list the
    /// policy decides. Otherwise the name must match a list entry exactly.
    #[must_use]
    pub fn allows(&self, field_name: &str) -> bool {
        if field_name.is_empty() || !self.context.enabled {
            return false;
        }

        match self.context.allowed_fields.as_deref() {
            None => self.policy == MissingAllowListPolicy::AllowAll,
            Some(allowed) => allowed.iter().any(|allowed| allowed == field_name),
        }
    }

    /// Returns whether at least one of `field_names` is accessible.
    #[must_use]
    pub fn allows_any<S: AsRef<str>>(&self, field_names: &[S]) -> bool {
        field_names
            .iter()
            .any(|field_name| self.allows(field_name.as_ref()))
    }
}
