use crate::domain::{Member, MemberId};

/// Registered members, in the order they joined.
#[derive(Debug, Default)]
pub struct Membership {
    members: Vec<Member>,
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member. Callers check for an existing id first.
    pub fn add(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn find_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|member| member.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.find(id).is_some()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
