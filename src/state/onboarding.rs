//! Organization-setup wizard draft.
//!
//! DESIGN
//! ======
//! The wizard has no server-side source of truth: each step reads the one
//! draft record, mutates the whole object, and writes it back. Concurrent
//! tabs are last-writer-wins — an accepted limitation of the storage key,
//! not something this layer papers over. A step loaded without a draft must
//! send the visitor back to the flow entry; deep-linking into the middle of
//! the wizard is unsupported.
//!
//! The terminal commit treats server-session creation and draft deletion
//! as one conceptual unit: the draft is only deleted once the session
//! exists, so a failed commit can be retried.

#[cfg(test)]
#[path = "onboarding_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::auth::service::{AuthError, SessionService};
use crate::auth::sudo::SudoMode;
use crate::net::api::HttpClient;
use crate::util::clock;
use crate::util::storage::StorageBackend;

pub const DRAFT_KEY: &str = "organizationSetup";

/// Entry page of the wizard; draft-less steps redirect here.
pub const FLOW_ENTRY_PATH: &str = "/setup-org";

/// How far the draft has progressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStep {
    #[serde(rename = "organization-created")]
    OrganizationCreated,
    #[serde(rename = "members-added")]
    MembersAdded,
    #[serde(rename = "members-skipped")]
    MembersSkipped,
}

/// A member picked in the invite step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftMember {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// The whole wizard draft, stored as one JSON record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingDraft {
    pub organization_name: String,
    pub contact_email: String,
    pub organization_type: String,
    pub ai_agent_addon: bool,
    #[serde(default)]
    pub members: Vec<DraftMember>,
    pub step: OnboardingStep,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds; bumped on every step write.
    pub updated_at: i64,
}

impl OnboardingDraft {
    /// Fresh draft as produced by the organization-details step.
    #[must_use]
    pub fn new(
        organization_name: String,
        contact_email: String,
        organization_type: String,
        ai_agent_addon: bool,
        now_ms: i64,
    ) -> Self {
        Self {
            organization_name,
            contact_email,
            organization_type,
            ai_agent_addon,
            members: Vec::new(),
            step: OnboardingStep::OrganizationCreated,
            created_at: now_ms,
            updated_at: now_ms,
        }
    }
}

/// Store over the single draft record.
#[derive(Clone, Debug)]
pub struct DraftStore<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> DraftStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the draft. A record that fails to parse is dropped and reads
    /// as absent, which routes the visitor back to the flow entry instead
    /// of crashing the step.
    pub fn load(&self) -> Option<OnboardingDraft> {
        let raw = self.storage.get(DRAFT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(draft) => Some(draft),
            Err(err) => {
                log::warn!("discarding corrupt onboarding draft: {err}");
                self.storage.remove(DRAFT_KEY);
                None
            }
        }
    }

    /// Write the whole draft record.
    pub fn save(&self, draft: &OnboardingDraft) {
        match serde_json::to_string(draft) {
            Ok(raw) => self.storage.set(DRAFT_KEY, &raw),
            Err(err) => log::warn!("failed to serialize onboarding draft: {err}"),
        }
    }

    /// Delete the draft record.
    pub fn clear(&self) {
        self.storage.remove(DRAFT_KEY);
    }

    /// Read-modify-write for the invite step: replace the member list and
    /// advance the step. Returns the updated draft, or `None` when there is
    /// no draft to update (caller redirects to the flow entry).
    pub fn record_members(&self, members: Vec<DraftMember>, now_ms: i64) -> Option<OnboardingDraft> {
        let mut draft = self.load()?;
        draft.step = if members.is_empty() {
            OnboardingStep::MembersSkipped
        } else {
            OnboardingStep::MembersAdded
        };
        draft.members = members;
        draft.updated_at = now_ms;
        self.save(&draft);
        Some(draft)
    }
}

/// Terminal commit for the wizard: establish the server session, arm the
/// sudo window, and only then delete the draft. When session creation
/// fails the draft stays put so the confirmation step can retry.
pub async fn complete_setup<C: HttpClient, S: StorageBackend>(
    service: &SessionService<C, S>,
    drafts: &DraftStore<S>,
    sudo: &SudoMode<S>,
) -> Result<(), AuthError> {
    service.establish_server_session().await?;
    sudo.enter_at(clock::now_ms());
    drafts.clear();
    Ok(())
}
