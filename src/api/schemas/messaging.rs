use serde::Deserialize;

/// Body of `POST /api/messages`. The sender is the authenticated caller; the
/// receiver identity is accepted as-is, without a directory check.
#[derive(Deserialize, Debug)]
pub struct MessageCreate {
    pub receiver_id: String,
    pub message: String,
}
