//! Catalog download leads.

use chrono::Utc;
use ecomoving_schema::LeadSubmission;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::SiteError;
use crate::supabase::SupabaseClient;

/// A lead that passed validation, trimmed, ready to store.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub created_at: String,
}

impl TryFrom<LeadSubmission> for Lead {
    type Error = SiteError;

    fn try_from(form: LeadSubmission) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        let email = form.email.trim();
        let company = form.company.trim();

        if name.is_empty() {
            return Err(SiteError::BadRequest("El nombre es obligatorio.".to_string()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(SiteError::BadRequest(
                "Ingresa un correo electrónico válido.".to_string(),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            created_at: Utc::now().to_rfc3339(),
        })
    }
}

/// Accepts leads and optionally stores them in a table.
#[derive(Debug, Clone)]
pub struct LeadInbox {
    store: Option<(SupabaseClient, String)>,
}

impl LeadInbox {
    /// `table` unset means leads are only logged.
    pub fn new(client: SupabaseClient, table: Option<String>) -> Self {
        Self {
            store: table
                .filter(|t| !t.trim().is_empty())
                .map(|t| (client, t)),
        }
    }

    /// Validates and records a lead. Only validation errors are returned;
    /// a failed insert is logged and the lead still counts as accepted.
    pub async fn submit(&self, form: LeadSubmission) -> Result<Lead, SiteError> {
        let lead = Lead::try_from(form)?;
        info!(
            email = %lead.email,
            company = lead.company.as_deref().unwrap_or("-"),
            "Lead captured"
        );

        if let Some((client, table)) = &self.store
            && let Err(e) = client.table(table).insert(&lead).await
        {
            warn!(table = %table, error = %e, "Failed to store lead");
        }
        Ok(lead)
    }
}
