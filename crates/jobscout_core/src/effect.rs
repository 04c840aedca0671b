#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitSearch {
        request_id: crate::RequestId,
        keywords: Vec<String>,
    },
    CancelSearch {
        request_id: crate::RequestId,
    },
}
