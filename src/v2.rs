//! UUIDv2 (DCE Security) functionality

use crate::node::node_id;
use crate::source::{OsRandSource, RandSource, StdSystemTime, TimeSource};
use crate::v1::generate_v1;
use crate::{Error, Uuid};

/// The DCE Security domain embedded in a UUIDv2.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(u8)]
pub enum Domain {
    /// The local id is a POSIX user id.
    Person = 0,
    /// The local id is a POSIX group id.
    Group = 1,
    /// The local id is an organization-defined value.
    Org = 2,
}

impl TryFrom<u8> for Domain {
    type Error = u8;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            0 => Ok(Self::Person),
            1 => Ok(Self::Group),
            2 => Ok(Self::Org),
            _ => Err(src),
        }
    }
}

impl Uuid {
    /// Returns the DCE Security domain of a UUIDv2, or `None` if the value is not a UUIDv2 or
    /// carries an unknown domain code.
    pub fn domain(&self) -> Option<Domain> {
        if self.version() == 2 {
            Domain::try_from(self.as_bytes()[9]).ok()
        } else {
            None
        }
    }

    /// Returns the 32-bit local id of a UUIDv2, or `None` if the value is not a UUIDv2.
    pub fn local_id(&self) -> Option<u32> {
        if self.version() == 2 {
            let b = self.as_bytes();
            Some(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        } else {
            None
        }
    }
}

/// Generates a UUIDv2 object embedding `domain` and `local_id`.
///
/// # Examples
///
/// ```rust
/// use uuid9562::{uuid2, Domain};
///
/// let uuid = uuid2(Domain::Org, 0xcafe)?;
/// assert_eq!(uuid.version(), 2);
/// assert_eq!(uuid.domain(), Some(Domain::Org));
/// assert_eq!(uuid.local_id(), Some(0xcafe));
/// # Ok::<(), uuid9562::Error>(())
/// ```
pub fn uuid2(domain: Domain, local_id: u32) -> Result<Uuid, Error> {
    generate_v2(
        &mut OsRandSource::default(),
        &mut StdSystemTime,
        node_id()?,
        domain,
        local_id,
    )
}

/// Generates a UUIDv2 object in the [`Domain::Person`] domain for the user id of the current
/// process.
///
/// # Errors
///
/// Returns [`Error::ProcessIdentity`] if the user id cannot be determined.
#[cfg(all(unix, feature = "host"))]
#[cfg_attr(docsrs, doc(cfg(all(unix, feature = "host"))))]
pub fn uuid2_person() -> Result<Uuid, Error> {
    let (uid, _) = process_identity::current()?;
    uuid2(Domain::Person, uid)
}

/// Generates a UUIDv2 object in the [`Domain::Group`] domain for the group id of the current
/// process.
///
/// # Errors
///
/// Returns [`Error::ProcessIdentity`] if the group id cannot be determined.
#[cfg(all(unix, feature = "host"))]
#[cfg_attr(docsrs, doc(cfg(all(unix, feature = "host"))))]
pub fn uuid2_group() -> Result<Uuid, Error> {
    let (_, gid) = process_identity::current()?;
    uuid2(Domain::Group, gid)
}

/// Generates a UUIDv2 object from the given sources and node id.
///
/// The value is built as a UUIDv1 whose `time_low` field is replaced by `local_id` and whose
/// `clock_seq_low` octet is replaced by the domain code.
pub fn generate_v2<R: RandSource, T: TimeSource>(
    rng: &mut R,
    clock: &mut T,
    node: [u8; 6],
    domain: Domain,
    local_id: u32,
) -> Result<Uuid, Error> {
    let mut bytes = generate_v1(rng, clock, node)?.to_bytes();
    bytes[0..4].copy_from_slice(&local_id.to_be_bytes());
    bytes[9] = domain as u8;
    Ok(Uuid::from(bytes).stamped(2))
}

#[cfg(all(unix, feature = "host"))]
mod process_identity {
    use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

    use crate::Error;

    /// Returns the user id and group id of the current process.
    pub fn current() -> Result<(u32, u32), Error> {
        let pid = sysinfo::get_current_pid().map_err(Error::ProcessIdentity)?;
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            false,
            ProcessRefreshKind::everything(),
        );
        let process = system
            .process(pid)
            .ok_or(Error::ProcessIdentity("current process not found"))?;
        let uid = process
            .user_id()
            .ok_or(Error::ProcessIdentity("user id unavailable"))?;
        let gid = process
            .group_id()
            .ok_or(Error::ProcessIdentity("group id unavailable"))?;
        Ok((**uid, *gid))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{generate_v2, uuid2, Domain};
    use crate::source::testing::{ConstRand, ScriptedClock};
    use crate::{Uuid, Variant};

    /// Embeds domain and local id into UUIDv1 layout
    #[test]
    fn embeds_domain_and_local_id_into_v1_layout() {
        let mut clock = ScriptedClock::new([Duration::from_secs(1_645_557_742)]);
        let node = [0x9f, 0x6b, 0xde, 0xce, 0xd8, 0x46];
        let e = generate_v2(&mut ConstRand(0x33), &mut clock, node, Domain::Group, 1000);
        let e = e.unwrap();
        assert_eq!(&e.encode() as &str, "000003e8-9414-21ec-b301-9f6bdeced846");
        assert_eq!(e.version(), 2);
        assert_eq!(e.variant(), Variant::Rfc4122);
        assert_eq!(e.domain(), Some(Domain::Group));
        assert_eq!(e.local_id(), Some(1000));
    }

    /// Generates all domains
    #[test]
    fn generates_all_domains() {
        let cases = [
            (Domain::Person, 0),
            (Domain::Group, 100),
            (Domain::Org, u32::MAX),
        ];
        for (domain, id) in cases {
            let e = uuid2(domain, id).unwrap();
            assert_eq!(e.version(), 2);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.domain(), Some(domain));
            assert_eq!(e.local_id(), Some(id));
        }
    }

    /// Returns no domain view for other versions
    #[test]
    fn returns_no_domain_view_for_other_versions() {
        let e = Uuid::from_fields_v1(0x1ec9414c232ab00, 0x3301, [0u8; 6]);
        assert_eq!(e.domain(), None);
        assert_eq!(e.local_id(), None);

        let e = Uuid::parse("000003e8-9414-21ec-b3ff-9f6bdeced846").unwrap();
        assert_eq!(e.domain(), None);
        assert_eq!(e.local_id(), Some(1000));
    }

    /// Uses current process identity
    #[cfg(all(unix, feature = "host"))]
    #[test]
    fn uses_current_process_identity() {
        let person = super::uuid2_person().unwrap();
        assert_eq!(person.domain(), Some(Domain::Person));
        let group = super::uuid2_group().unwrap();
        assert_eq!(group.domain(), Some(Domain::Group));
        assert_eq!(
            person.local_id(),
            Some(super::process_identity::current().unwrap().0)
        );
    }
}
