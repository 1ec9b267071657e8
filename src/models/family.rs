//! Family model
//!
//! A family starts as a couple and grows as children are added. Members are
//! owned by the family in the order they joined; there is no removal.

use serde::{Deserialize, Serialize};

use super::ids::{FamilyId, PersonId};
use super::person::{marry, Person, MINIMUM_MARRIAGE_AGE};

/// A member must be strictly older than this for the family to have a child
pub const PARENT_AGE_THRESHOLD: u32 = MINIMUM_MARRIAGE_AGE;

/// A household of people
///
/// Spouse links between members are always symmetric, including for
/// families read back from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredFamily")]
pub struct Family {
    /// Unique identifier
    pub id: FamilyId,

    members: Vec<Person>,
}

/// A family as read from storage, before spouse links are checked
#[derive(Deserialize)]
struct StoredFamily {
    id: FamilyId,
    members: Vec<Person>,
}

impl From<StoredFamily> for Family {
    fn from(stored: StoredFamily) -> Self {
        let mut members = stored.members;
        let links: Vec<(PersonId, Option<PersonId>)> =
            members.iter().map(|m| (m.id, m.spouse())).collect();

        for member in &mut members {
            let Some(spouse_id) = member.spouse() else {
                continue;
            };

            let reciprocated = links
                .iter()
                .any(|&(id, spouse)| id == spouse_id && spouse == Some(member.id));

            if !reciprocated {
                tracing::warn!(
                    family = %stored.id,
                    person = %member.id,
                    "spouse link not matched within the family, link dropped"
                );
                member.forget_spouse();
            }
        }

        Self {
            id: stored.id,
            members,
        }
    }
}

impl Family {
    /// Create a family from a couple
    ///
    /// The two are married to each other through [`marry`], so the usual
    /// rules apply: an under-age couple still forms a family but stays
    /// unlinked. Returns `None` if either is already married to someone
    /// else.
    pub fn new(mut spouse1: Person, mut spouse2: Person) -> Option<Self> {
        let married_elsewhere = |person: &Person, partner: &Person| {
            person.spouse().is_some_and(|id| id != partner.id)
        };

        if married_elsewhere(&spouse1, &spouse2) || married_elsewhere(&spouse2, &spouse1) {
            tracing::warn!(
                first = %spouse1.id,
                second = %spouse2.id,
                "already married to someone else, family not formed"
            );
            return None;
        }

        marry(&mut spouse1, &mut spouse2);

        Some(Self {
            id: FamilyId::new(),
            members: vec![spouse1, spouse2],
        })
    }

    /// All members, in the order they joined
    pub fn members(&self) -> &[Person] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by id
    pub fn member(&self, id: PersonId) -> Option<&Person> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Mutable lookup, e.g. to assign a job
    pub fn member_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// The spouse of a member, if married within the family
    pub fn spouse_of(&self, id: PersonId) -> Option<&Person> {
        self.member(id)
            .and_then(|m| m.spouse())
            .and_then(|spouse_id| self.member(spouse_id))
    }

    /// Diagnostic description of a member with the spouse name resolved
    pub fn describe_member(&self, id: PersonId) -> Option<String> {
        self.member(id)
            .map(|member| member.describe(self.spouse_of(id)))
    }

    /// Returns true if some member is old enough to have a child
    pub fn can_have_children(&self) -> bool {
        self.members.iter().any(|m| m.age() > PARENT_AGE_THRESHOLD)
    }

    /// Add a child
    ///
    /// Silent drop: the child is only added when some current member is
    /// older than `PARENT_AGE_THRESHOLD`; otherwise members are left
    /// unchanged and `false` is returned.
    pub fn have_child(&mut self, child: Person) -> bool {
        if !self.can_have_children() {
            tracing::warn!(
                family = %self.id,
                child = %child.id,
                "no member old enough to have a child, child dropped"
            );
            return false;
        }

        self.members.push(child);
        true
    }

    /// Members that currently hold a job
    pub fn employed_members(&self) -> impl Iterator<Item = &Person> {
        self.members.iter().filter(|m| m.job().is_some())
    }

    /// Combined annual income of every employed member
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .filter_map(|m| m.job())
            .map(|job| job.annual_income())
            .sum()
    }
}
