//! Wire format for leads sent to the intake webhook

use crate::state::ContactFields;
use serde::Serialize;

/// JSON body of the intake POST. The privacy checkbox is not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub first_name: String,
    pub last_name: String,
    pub business_email: String,
    pub company: String,
    pub job_title: String,
    pub message: String,
}

impl From<&ContactFields> for LeadPayload {
    fn from(fields: &ContactFields) -> Self {
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            business_email: fields.business_email.clone(),
            company: fields.company.clone(),
            job_title: fields.job_title.clone(),
            message: fields.message.clone(),
        }
    }
}
