use serde::{Deserialize, Serialize};

/// Highest value the vendor accepts for speed, pitch and volume.
pub const MAX_LEVEL: u8 = 15;

/// Synthesis parameters in the vendor's terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsOptions {
    /// `jp`, `zh` or `en`.
    pub lang: String,
    /// Speed, 0-15.
    pub spd: u8,
    /// Pitch, 0-15.
    pub pit: u8,
    /// Volume, 0-15.
    pub vol: u8,
    /// Speaker: 0 female, 1 male, 3 and 4 are the expressive voices.
    pub per: u8,
}

impl Default for TtsOptions {
    fn default() -> Self {
        Self {
            lang: "jp".to_string(),
            spd: 5,
            pit: 5,
            vol: 7,
            per: 0,
        }
    }
}

impl TtsOptions {
    /// Clamp levels into the accepted range.
    pub fn normalized(mut self) -> Self {
        self.spd = self.spd.min(MAX_LEVEL);
        self.pit = self.pit.min(MAX_LEVEL);
        self.vol = self.vol.min(MAX_LEVEL);
        if self.lang.trim().is_empty() {
            self.lang = TtsOptions::default().lang;
        }
        self
    }

    pub fn cache_key(&self, text: &str) -> String {
        format!(
            "baidu-{text}-{}-{}-{}-{}-{}",
            self.lang, self.spd, self.pit, self.vol, self.per
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// Choices offered in the voice settings panel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceOptions {
    pub speakers: &'static [VoiceOption],
    pub speeds: &'static [VoiceOption],
    pub pitches: &'static [VoiceOption],
}

pub const VOICE_OPTIONS: VoiceOptions = VoiceOptions {
    speakers: &[
        VoiceOption { value: 0, label: "女声（温柔）", description: "标准女声，适合日常学习" },
        VoiceOption { value: 1, label: "男声（稳重）", description: "标准男声，发音清晰" },
        VoiceOption { value: 3, label: "度逍遥（情感）", description: "情感丰富的男声" },
        VoiceOption { value: 4, label: "度丫丫（活泼）", description: "活泼可爱的女声" },
    ],
    speeds: &[
        VoiceOption { value: 3, label: "较慢", description: "适合初学者" },
        VoiceOption { value: 5, label: "正常", description: "标准语速" },
        VoiceOption { value: 7, label: "较快", description: "适合熟练者" },
        VoiceOption { value: 9, label: "很快", description: "挑战模式" },
    ],
    pitches: &[
        VoiceOption { value: 3, label: "低音调", description: "低沉稳重" },
        VoiceOption { value: 5, label: "标准音调", description: "自然音调" },
        VoiceOption { value: 7, label: "高音调", description: "清脆明亮" },
    ],
};
