//! Deterministic generator of synthetic [`User`]s.
//!
//! Every [`User`] consumes exactly seven draws of a single [`Lcg`] stream in
//! a fixed order: first name, last name, phone prefix, phone tail, joining
//! offset, organization and status. Reordering the draws changes the whole
//! dataset, so it requires bumping the snapshot [`Version`].
//!
//! [`Version`]: crate::snapshot::Version

use std::time::Duration;

use common::DateTime;
use smart_default::SmartDefault;

use crate::domain::{
    user::{self, Status},
    User,
};

/// Organizations [`User`]s belong to.
pub const ORGANIZATIONS: [&str; 40] = [
    "Lendsqr", "Irorun", "Lendstar", "BorrowMe", "iPay", "Seed", "Zentra",
    "CrediWave", "FlexiFund", "NovaLend", "SwiftCredit", "LoanLink",
    "PrimeAdvance", "EasyCap", "FundSure", "QuickVest", "ZenithLoans",
    "CashPilot", "Lendora", "SurePadi", "TrustHive", "CreditVille", "FundFlow",
    "BridgeLoan", "LendWise", "PledgePoint", "MoneySprint", "SmartCredit",
    "KoloTrust", "Fundora", "LoanMate", "CashBridge", "FastFund", "CrediPoint",
    "BlueVest", "LoanEdge", "EasyLend", "CredSure", "QuickRelief",
    "GrowCredit",
];

/// First names of [`User`]s.
pub const FIRST_NAMES: [&str; 50] = [
    "Grace", "Tosin", "Debby", "Alex", "Mariam", "John", "Ada", "Tola", "Seyi",
    "Kemi", "David", "Bola", "Chika", "Emeka", "Lara", "Michael", "Femi",
    "Ngozi", "Tunde", "Amaka", "Samuel", "Ruth", "Damilola", "Ife", "Pelumi",
    "Victor", "Olamide", "Esther", "Henry", "Joy", "Precious", "Chioma",
    "Bolaji", "Gbenga", "Helen", "Stephen", "Omotola", "Faith", "Jide",
    "Nancy", "Opeyemi", "Kingsley", "Oluwadamilare", "Anita", "Tope",
    "Olumide", "Shola", "Kehinde", "Daniel", "Rebecca",
];

/// Last names of [`User`]s.
pub const LAST_NAMES: [&str; 50] = [
    "Effiom", "Dokunmu", "Ogana", "Adeyemi", "Okafor", "James", "Abiola",
    "Oshodi", "Popoola", "Bello", "Adewale", "Eze", "Ogunleye", "Balogun",
    "Daniels", "Lawal", "Ojo", "Nwosu", "Okoro", "Taiwo", "Agbaje",
    "Mohammed", "Akinola", "Ekanem", "Obi", "Yusuf", "Olatunji", "Chukwu",
    "Adeleke", "Salami", "Uche", "Adebanjo", "Ogunbiyi", "Olawale", "Afolabi",
    "Ajayi", "Ogunjimi", "Ogunlade", "Okonkwo", "Ogunmola", "Oyeniran",
    "Alabi", "Onwuka", "Odunsi", "Adewumi", "Suleiman", "Bamidele",
    "Ogundipe", "Egbeyemi", "Ibrahim",
];

/// Local-format prefixes of [`user::Phone`]s.
pub const PHONE_PREFIXES: [&str; 5] = ["070", "080", "081", "090", "091"];

/// Exclusive upper bound of a [`user::Phone`] tail.
const PHONE_TAIL_RANGE: u64 = 100_000_000;

/// Exclusive upper bound of a joining offset, in milliseconds (365 days).
const JOINING_OFFSET_RANGE: u64 = 1_000 * 60 * 60 * 24 * 365;

/// [`generate()`] configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Seed of the [`Lcg`] stream.
    #[default(12345)]
    pub seed: u32,

    /// Number of [`User`]s to generate.
    #[default(500)]
    pub count: u32,
}

/// Linear-congruential pseudo-random stream over [`u32`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lcg(u32);

impl Lcg {
    /// Multiplier of the stream.
    const MULTIPLIER: u32 = 1_664_525;

    /// Increment of the stream.
    const INCREMENT: u32 = 1_013_904_223;

    /// Creates a new [`Lcg`] stream out of the provided `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self(seed)
    }

    /// Advances this [`Lcg`] stream and returns its new state.
    pub fn draw(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.0
    }

    /// Draws a number in `0..bound` range.
    fn below(&mut self, bound: u64) -> u64 {
        u64::from(self.draw()) % bound
    }

    /// Draws an element of the provided non-empty slice.
    fn pick<'a, T>(&mut self, from: &'a [T]) -> &'a T {
        &from[self.draw() as usize % from.len()]
    }
}

/// Generates `count` [`User`]s with [`user::Id`]s `1..=count`.
///
/// The same [`Config`] and `anchor` always produce the same [`User`]s. The
/// `anchor` is the moment [`User`]s' joining offsets are subtracted from.
#[must_use]
pub fn generate(config: Config, anchor: DateTime) -> Vec<User> {
    let mut lcg = Lcg::new(config.seed);
    (1..=config.count)
        .filter_map(user::Id::new)
        .map(|id| next(&mut lcg, id, anchor))
        .collect()
}

/// Generates the next [`User`] out of the provided [`Lcg`] stream.
fn next(lcg: &mut Lcg, id: user::Id, anchor: DateTime) -> User {
    let first = lcg.pick(&FIRST_NAMES);
    let last = lcg.pick(&LAST_NAMES);
    let prefix = lcg.pick(&PHONE_PREFIXES);
    let tail = lcg.below(PHONE_TAIL_RANGE);
    let offset = lcg.below(JOINING_OFFSET_RANGE);
    let organization = lcg.pick(&ORGANIZATIONS);
    let status = *lcg.pick(Status::all());

    #[expect(unsafe_code, reason = "built from well-formed dictionaries")]
    let (organization, name, phone) = unsafe {
        (
            user::Organization::new_unchecked(*organization),
            user::Name::new_unchecked(format!("{first} {last}")),
            user::Phone::new_unchecked(format!("{prefix}{tail:08}")),
        )
    };
    #[expect(unsafe_code, reason = "built from well-formed dictionaries")]
    let email = unsafe {
        user::Email::new_unchecked(format!(
            "{}@{}",
            first.to_lowercase(),
            organization.domain(),
        ))
    };

    User {
        id,
        organization,
        name,
        email,
        phone,
        joined_at: (anchor - Duration::from_millis(offset)).coerce(),
        status,
    }
}

#[cfg(test)]
mod spec {
    use std::collections::HashSet;

    use common::DateTime;
    use proptest::prelude::*;

    use crate::domain::user::{self, Status};

    use super::{generate, Config, Lcg};

    fn anchor() -> DateTime {
        DateTime::from_rfc3339("2025-06-01T12:00:00.000Z").unwrap()
    }

    #[test]
    fn lcg_stream() {
        let mut lcg = Lcg::new(12345);
        assert_eq!(lcg.draw(), 87_628_868);
        assert_eq!(lcg.draw(), 71_072_467);
    }

    #[test]
    fn first_records() {
        let users = generate(Config::default(), anchor());

        let first = &users[0];
        assert_eq!(first.id.get(), 1);
        assert_eq!(first.name.as_ref(), "Tunde Nwosu");
        assert_eq!(first.phone.as_ref(), "09126892157");
        assert_eq!(first.organization.as_ref(), "CashBridge");
        assert_eq!(first.email.as_ref(), "tunde@cashbridge.com");
        assert_eq!(first.status, Status::Pending);
        assert_eq!(
            first.joined_at.unix_timestamp_millis(),
            anchor().unix_timestamp_millis() - 3_908_547_000,
        );

        let second = &users[1];
        assert_eq!(second.name.as_ref(), "Alex Popoola");
        assert_eq!(second.phone.as_ref(), "07071172990");
        assert_eq!(second.email.as_ref(), "alex@flexifund.com");
        assert_eq!(second.status, Status::Blacklisted);
    }

    #[test]
    fn ids_are_contiguous() {
        let users = generate(Config::default(), anchor());

        assert_eq!(users.len(), 500);
        let ids = users.iter().map(|u| u.id.get()).collect::<HashSet<_>>();
        assert_eq!(ids, (1..=500).collect::<HashSet<_>>());
        assert!(users.iter().zip(1..).all(|(u, n)| u.id.get() == n));
    }

    #[test]
    fn generates_nothing_for_zero_count() {
        let users = generate(Config { seed: 1, count: 0 }, anchor());

        assert!(users.is_empty());
    }

    #[test]
    fn fields_are_well_formed() {
        let anchor = anchor();
        let year_ago = anchor.unix_timestamp_millis() - 31_536_000_000;

        for u in generate(Config::default(), anchor) {
            assert!(user::Phone::new(u.phone.as_ref()).is_some(), "{u:?}");
            assert!(user::Email::new(u.email.as_ref()).is_some(), "{u:?}");
            assert!(u.email.as_ref().ends_with(&u.organization.domain()));

            let joined = u.joined_at.unix_timestamp_millis();
            assert!(joined <= anchor.unix_timestamp_millis(), "{u:?}");
            assert!(joined > year_ago, "{u:?}");
        }
    }

    proptest! {
        #[test]
        fn is_deterministic(seed in any::<u32>(), count in 0u32..200) {
            let config = Config { seed, count };

            prop_assert_eq!(
                generate(config, anchor()),
                generate(config, anchor()),
            );
        }
    }
}
