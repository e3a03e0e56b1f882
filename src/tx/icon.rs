//! Transaction icon selection.

/// Operation categories shown in the activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Transfer,
    Receive,
    ContractCall,
}

/// Icon identifiers understood by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxIcon {
    Upload,
    Download,
    ArrowsLeftRight,
    ArrowRight,
}

/// Picks the icon for an operation.
///
/// The rendered label wins over the operation kind: a label mentioning
/// "Sent" always gets the upload icon and one mentioning "Received" the
/// download icon. An unknown operation falls back to a plain arrow.
pub fn tx_icon(kind: Option<OperationKind>, label: &str) -> TxIcon {
    let Some(kind) = kind else {
        return TxIcon::ArrowRight;
    };
    if label.contains("Sent") {
        return TxIcon::Upload;
    }
    if label.contains("Received") {
        return TxIcon::Download;
    }
    match kind {
        OperationKind::Transfer => TxIcon::Upload,
        OperationKind::Receive => TxIcon::Download,
        OperationKind::ContractCall => TxIcon::ArrowsLeftRight,
    }
}
