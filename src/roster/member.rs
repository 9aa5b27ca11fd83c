/// One club member, decoded from the pipe-delimited composite column.
///
/// Segment order matches the DEWIS export: id, nachname, vorname, titel,
/// verein, mglnr, status, dwz, dwzindex, turniercode, turnierende, fideid,
/// fideelo, fidetitel. Only the first three are required; anything after
/// them may be missing on older exports.
#[derive(Debug, Clone)]
#[allow(dead_code)] // the whitelist pipeline consumes only a few segments
pub struct Member {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub title: String,
    pub club: String,
    pub membership_no: String,
    pub status: String,
    pub dwz: Option<u32>,
    pub dwz_index: String,
    pub tournament_code: String,
    pub tournament_end: String,
    pub fide_id: String,
    pub fide_elo: Option<u32>,
    pub fide_title: String,
}

impl Member {
    /// Decode a composite value, or `None` when it has fewer than 3 segments.
    pub fn parse(raw: &str) -> Option<Member> {
        let seg: Vec<&str> = raw.split('|').collect();
        if seg.len() < 3 {
            return None;
        }
        let get = |i: usize| seg.get(i).copied().unwrap_or("").to_string();

        Some(Member {
            id: get(0),
            last_name: get(1),
            first_name: get(2),
            title: get(3),
            club: get(4),
            membership_no: get(5),
            status: get(6),
            dwz: seg.get(7).and_then(|s| s.parse().ok()),
            dwz_index: get(8),
            tournament_code: get(9),
            tournament_end: get(10),
            fide_id: get(11),
            fide_elo: seg.get(12).and_then(|s| s.parse().ok()),
            fide_title: get(13),
        })
    }

    /// "<first> <last>" when both halves are present, otherwise whichever
    /// one is. `None` means the row contributes nothing to the whitelist.
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => Some(format!("{} {}", self.first_name, self.last_name)),
            (false, true) => Some(self.first_name.clone()),
            (true, false) => Some(self.last_name.clone()),
            (true, true) => None,
        }
    }
}
