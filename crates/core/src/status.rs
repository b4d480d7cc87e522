//! Status helper enums mapping to SMALLINT columns.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! documented in the corresponding table's migration.

/// Status ID type matching SMALLINT in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Resolve a database status ID back to the enum variant.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Tour publication lifecycle status.
    TourStatus {
        Draft = 1,
        Published = 2,
        Archived = 3,
    }
}

define_status_enum! {
    /// Tour privacy flag, orthogonal to [`TourStatus`].
    TourPrivacy {
        Public = 1,
        Private = 2,
    }
}

define_status_enum! {
    /// Recording processing status.
    RecordingStatus {
        Recording = 1,
        Processing = 2,
        Completed = 3,
        Failed = 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tour_status_ids_match_seed_data() {
        assert_eq!(TourStatus::Draft.id(), 1);
        assert_eq!(TourStatus::Published.id(), 2);
        assert_eq!(TourStatus::Archived.id(), 3);
    }

    #[test]
    fn privacy_ids_match_seed_data() {
        assert_eq!(TourPrivacy::Public.id(), 1);
        assert_eq!(TourPrivacy::Private.id(), 2);
    }

    #[test]
    fn recording_status_ids_match_seed_data() {
        assert_eq!(RecordingStatus::Recording.id(), 1);
        assert_eq!(RecordingStatus::Processing.id(), 2);
        assert_eq!(RecordingStatus::Completed.id(), 3);
        assert_eq!(RecordingStatus::Failed.id(), 4);
    }

    #[test]
    fn from_id_round_trips() {
        assert_eq!(TourStatus::from_id(2), Some(TourStatus::Published));
        assert_eq!(TourStatus::from_id(99), None);
        assert_eq!(TourPrivacy::from_id(2), Some(TourPrivacy::Private));
        assert_eq!(RecordingStatus::from_id(4), Some(RecordingStatus::Failed));
    }

    #[test]
    fn status_into_status_id() {
        let id: StatusId = TourStatus::Draft.into();
        assert_eq!(id, 1);
    }
}
