/*
[INPUT]:  Raw user ids or identity-bearing records
[OUTPUT]: Uniform numeric user id
[POS]:    Data layer - identity argument for ownership checks
[UPDATE]: When another record type can identify a user
*/

use super::models::{Creator, PartialUser, User};

/// Anything that identifies a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRef<'a> {
    Id(u64),
    PartialUser(&'a PartialUser),
    User(&'a User),
    Creator(&'a Creator),
}

impl UserRef<'_> {
    pub fn id(&self) -> u64 {
        match self {
            UserRef::Id(id) => *id,
            UserRef::PartialUser(user) => user.id,
            UserRef::User(user) => user.id,
            UserRef::Creator(creator) => creator.id,
        }
    }
}

impl From<u64> for UserRef<'_> {
    fn from(id: u64) -> Self {
        UserRef::Id(id)
    }
}

impl<'a> From<&'a PartialUser> for UserRef<'a> {
    fn from(user: &'a PartialUser) -> Self {
        UserRef::PartialUser(user)
    }
}

impl<'a> From<&'a User> for UserRef<'a> {
    fn from(user: &'a User) -> Self {
        UserRef::User(user)
    }
}

impl<'a> From<&'a Creator> for UserRef<'a> {
    fn from(creator: &'a Creator) -> Self {
        UserRef::Creator(creator)
    }
}
