//! External-code tables for enumerated fields.

/// One declared member of an enumeration.
///
/// `external_code` is the short code the wire format carries for this member
/// (for example `R` for `Root`). Members without one travel under their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub name: &'static str,
    pub external_code: Option<&'static str>,
}

impl EnumMember {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            external_code: None,
        }
    }

    pub const fn with_code(name: &'static str, external_code: &'static str) -> Self {
        Self {
            name,
            external_code: Some(external_code),
        }
    }

    /// The string emitted on the wire for this member.
    pub fn wire_code(&self) -> &'static str {
        self.external_code.unwrap_or(self.name)
    }
}

/// Static member table of an enumeration type.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDef {
    pub name: &'static str,
    pub members: &'static [EnumMember],
}

impl EnumDef {
    pub const fn new(name: &'static str, members: &'static [EnumMember]) -> Self {
        Self { name, members }
    }

    /// Resolve a wire string to a member.
    ///
    /// External codes are matched exactly and take precedence; otherwise the
    /// member name is matched ignoring ASCII case.
    pub fn resolve(&self, input: &str) -> Option<&'static EnumMember> {
        let members = self.members;
        members
            .iter()
            .find(|member| member.external_code == Some(input))
            .or_else(|| {
                members
                    .iter()
                    .find(|member| member.name.eq_ignore_ascii_case(input))
            })
    }

    /// Look up a member by its exact name.
    pub fn member(&self, name: &str) -> Option<&'static EnumMember> {
        let members = self.members;
        members.iter().find(|member| member.name == name)
    }
}
