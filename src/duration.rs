//! 経過時間計算モジュール

use std::fmt;

/// 経過時間（時間・分）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: i64,
    /// 0-59。時計が巻き戻った場合は負になりうる
    pub minutes: i64,
}

impl Elapsed {
    /// 前回のマーカー時刻から現在時刻までの経過時間を計算
    ///
    /// `since` が0の場合は記録がないため `(0, 0)` を返す。
    /// 負の経過時間は補正しない。差がi64に収まらない場合は `None`。
    pub fn between(since: i64, now: i64) -> Option<Self> {
        if since == 0 {
            return Some(Self::default());
        }

        let seconds = now.checked_sub(since)?;
        Some(Self {
            hours: seconds / 3600,
            minutes: (seconds / 60) % 60,
        })
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours != 0 {
            write!(f, "{}時間{}分", self.hours, self.minutes)
        } else {
            write!(f, "{}分", self.minutes)
        }
    }
}
