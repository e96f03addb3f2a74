/// Points for one correct guess: the question's value spread over its letters,
/// plus a streak bonus measured before the streak is incremented.
pub fn guess_points(points_value: u32, answer_len: usize, streak: u32) -> u32 {
    let len = answer_len.max(1) as u32;
    points_value.div_ceil(len) + streak * 2
}

/// Bonus for finishing the answer with a direct guess.
pub fn clear_bonus(time_left: u32) -> u32 {
    time_left * 2
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTitle {
    Trainee,
    Runner,
    Netrunner,
    CyberLord,
}

impl RankTitle {
    pub fn as_str(self) -> &'static str {
        match self {
            RankTitle::Trainee => "TRAINEE",
            RankTitle::Runner => "RUNNER",
            RankTitle::Netrunner => "NETRUNNER",
            RankTitle::CyberLord => "CYBER LORD",
        }
    }
}

pub fn rank_title(score: u32) -> RankTitle {
    match score {
        3000.. => RankTitle::CyberLord,
        1500.. => RankTitle::Netrunner,
        500.. => RankTitle::Runner,
        _ => RankTitle::Trainee,
    }
}
