/// A channel argument as typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelReference<'a> {
    /// Bare channel id
    PlainId(&'a str),

    /// `<team>:<channel-name>`, split on the first `:`
    TeamQualified {
        team_id: &'a str,
        channel_name: &'a str,
    },
}

impl<'a> ChannelReference<'a> {
    pub fn parse(reference: &'a str) -> Self {
        match reference.split_once(':') {
            Some((team_id, channel_name)) => Self::TeamQualified {
                team_id,
                channel_name,
            },
            None => Self::PlainId(reference),
        }
    }
}
