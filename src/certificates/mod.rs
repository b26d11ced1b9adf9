//! Certificate issuance.
//!
//! Certificates are derived, never separately persisted: the id is a pure
//! function of the holder's identity and the day the final assessment was
//! passed, so reissuing yields a byte-identical certificate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{PortalError, PortalResult};
use crate::progress::UserProgress;

const CERTIFICATE_ID_PREFIX: &str = "OCRP";
const CERTIFICATE_ID_DIGITS: usize = 10;

/// Identity printed on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateHolder {
    pub name: String,
    pub organization: String,
}

/// An issued certificate. Regenerable at any time from the same inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub certificate_id: String,
    pub holder_name: String,
    pub organization_name: String,
    pub issue_date: NaiveDate,
}

/// Issues the certificate for a learner who passed the final assessment.
///
/// Refused with `NotEligible` until the progress record carries a passed
/// outcome. Idempotent: repeated calls return the identical certificate.
pub fn issue(progress: &UserProgress, holder: &CertificateHolder) -> PortalResult<Certificate> {
    let result = progress.assessment.filter(|result| result.passed).ok_or(PortalError::NotEligible)?;
    let completion_day = result.completed_at.date_naive();
    Ok(Certificate {
        certificate_id: derive_certificate_id(holder, completion_day),
        holder_name: holder.name.clone(),
        organization_name: holder.organization.clone(),
        issue_date: completion_day,
    })
}

/// Stable id: `OCRP-` plus the leading hex of a SHA-256 over the holder's
/// identity and the completion day. No wall-clock input, so the id survives
/// re-renders and reissues unchanged.
fn derive_certificate_id(holder: &CertificateHolder, completion_day: NaiveDate) -> String {
    let mut hasher = Sha256::new();
    hasher.update(holder.name.as_bytes());
    hasher.update(b"\x1f");
    hasher.update(holder.organization.as_bytes());
    hasher.update(b"\x1f");
    hasher.update(completion_day.to_string().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!(
        "{CERTIFICATE_ID_PREFIX}-{}",
        digest[..CERTIFICATE_ID_DIGITS].to_ascii_uppercase()
    )
}
