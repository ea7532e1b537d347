//! Per-page-family extraction.
//!
//! Two generations of event pages coexist, with different labeling
//! conventions and different lookup-miss policies: the legacy campus-map
//! family silently yields empty values for a missing field, while the
//! official calendar family propagates the miss so the caller can skip the
//! record. The two policies are deliberately kept in separate types.

mod legacy;
mod official;

pub use self::legacy::LegacyPage;
pub use self::official::OfficialPage;
