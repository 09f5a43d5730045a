use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::sky::{MoonPhaseName, SkySnapshot};
use crate::zodiac::{Element, ZodiacSign};

fn moon_prompts(phase: MoonPhaseName) -> &'static [&'static str] {
    match phase {
        MoonPhaseName::NewMoon => &[
            "What intentions are you setting for this new cycle?",
            "What do you want to plant and grow in your life right now?",
            "What feels like a fresh start today?",
        ],
        MoonPhaseName::WaxingCrescent => &[
            "What small steps can you take toward your intentions today?",
            "What is beginning to emerge in your life?",
            "Where do you feel momentum building?",
        ],
        MoonPhaseName::FirstQuarter => &[
            "What challenges are you facing, and how can you overcome them?",
            "What decisions do you need to make right now?",
            "Where do you need to take bold action?",
        ],
        MoonPhaseName::WaxingGibbous => &[
            "What adjustments do you need to make before things come to fruition?",
            "What are you learning about yourself this week?",
            "How can you refine your approach?",
        ],
        MoonPhaseName::FullMoon => &[
            "What has come to completion or fullness in your life?",
            "What are you grateful for right now?",
            "What emotions are rising to the surface?",
        ],
        MoonPhaseName::WaningGibbous => &[
            "What wisdom have you gained recently?",
            "How can you share what you have learned with others?",
            "What are you ready to give back?",
        ],
        MoonPhaseName::LastQuarter => &[
            "What are you ready to release or let go of?",
            "What no longer serves you?",
            "How can you forgive — yourself or someone else?",
        ],
        MoonPhaseName::WaningCrescent => &[
            "What do you need to rest and recover from?",
            "How can you practice surrender today?",
            "What dreams or intuitions are speaking to you?",
        ],
    }
}

const RETROGRADE_PROMPTS: &[&str] = &[
    "Communication may feel off — journal about any miscommunications today.",
    "Mercury retrograde is a great time to revisit old projects. What deserves another look?",
    "Have you been putting off a difficult conversation? Write it out here first.",
    "What from your past is resurfacing? What can you learn from it?",
];

fn sign_themes(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aries => &["What fires you up? What gives you courage?"],
        ZodiacSign::Taurus => &["What brings you comfort and stability today?"],
        ZodiacSign::Gemini => &["What are you curious about? What conversations energized you?"],
        ZodiacSign::Cancer => &["How are you nurturing yourself and others?"],
        ZodiacSign::Leo => &["What makes you feel confident and alive?"],
        ZodiacSign::Virgo => &["What small details are you paying attention to?"],
        ZodiacSign::Libra => &["How are your relationships? Where do you need more balance?"],
        ZodiacSign::Scorpio => &["What deep truths are you uncovering?"],
        ZodiacSign::Sagittarius => &["What adventure or new knowledge excites you?"],
        ZodiacSign::Capricorn => &["What are you building? What goals are you working toward?"],
        ZodiacSign::Aquarius => &["How are you contributing to something bigger than yourself?"],
        ZodiacSign::Pisces => &["What dreams or creative visions are calling to you?"],
    }
}

fn horoscope_themes(element: Element) -> &'static [&'static str; 4] {
    match element {
        Element::Fire => &[
            "Your energy is high today — channel it into something creative.",
            "Take the lead on something that matters to you.",
            "Your enthusiasm is contagious. Share it with someone.",
            "A bold move could pay off today. Trust your instincts.",
        ],
        Element::Earth => &[
            "Focus on the practical today — small steps lead to big results.",
            "Ground yourself in nature or routine.",
            "Financial matters may need your attention.",
            "Build something lasting with your steady energy.",
        ],
        Element::Air => &[
            "Communication flows easily today — say what you mean.",
            "A new idea could spark an exciting conversation.",
            "Connect with someone who stimulates your mind.",
            "Your objectivity is your superpower today.",
        ],
        Element::Water => &[
            "Trust your intuition today — it is guiding you well.",
            "Take time to process your emotions through writing.",
            "A deep connection with someone may surprise you.",
            "Your empathy helps someone who needs it today.",
        ],
    }
}

/// One horoscope line per sign per day. The same date always yields the
/// same line, and signs sharing an element share it.
pub fn daily_horoscope(sign: ZodiacSign, date: NaiveDate) -> &'static str {
    let themes = horoscope_themes(sign.element());
    let seed = i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    themes[seed.rem_euclid(themes.len() as i64) as usize]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPrompt {
    pub prompt: String,
    /// Short label of what inspired the prompt
    pub source: String,
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &'static [&'static str]) -> &'static str {
    options[rng.gen_range(0..options.len())]
}

/// Choose a journaling prompt for the current sky.
///
/// Mercury retrograde wins outright. Otherwise a sun sign theme is used
/// about 40% of the time, and the moon phase supplies the rest.
pub fn journaling_prompt<R: Rng + ?Sized>(
    sun_sign: Option<ZodiacSign>,
    sky: &SkySnapshot,
    rng: &mut R,
) -> JournalPrompt {
    if sky.mercury_retrograde {
        return JournalPrompt {
            prompt: pick(rng, RETROGRADE_PROMPTS).to_string(),
            source: "Mercury Retrograde".to_string(),
        };
    }

    let moon_prompt = pick(rng, moon_prompts(sky.moon.name));

    if let Some(sign) = sun_sign {
        if rng.gen::<f64>() > 0.6 {
            return JournalPrompt {
                prompt: pick(rng, sign_themes(sign)).to_string(),
                source: format!("{sign} season"),
            };
        }
    }

    JournalPrompt {
        prompt: moon_prompt.to_string(),
        source: format!("{} {}", sky.moon.emoji, sky.moon.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky::MoonPhaseInfo;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sky(retrograde: bool) -> SkySnapshot {
        SkySnapshot {
            time: Utc.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap(),
            moon: MoonPhaseInfo {
                name: MoonPhaseName::NewMoon,
                emoji: "●".to_string(),
                fraction: 0.0,
                phase: 0.0,
            },
            mercury_retrograde: retrograde,
        }
    }

    #[test]
    fn test_horoscope_is_stable_for_a_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
        // 20240321 % 4 == 1
        assert_eq!(daily_horoscope(ZodiacSign::Aries, date), "Take the lead on something that matters to you.");
        assert_eq!(daily_horoscope(ZodiacSign::Leo, date), daily_horoscope(ZodiacSign::Aries, date));
        assert_ne!(daily_horoscope(ZodiacSign::Taurus, date), daily_horoscope(ZodiacSign::Aries, date));
    }

    #[test]
    fn test_horoscope_copy_is_reproduced_exactly() {
        // 20240320 % 4 == 0
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(
            daily_horoscope(ZodiacSign::Sagittarius, date),
            "Your energy is high today — channel it into something creative."
        );
        assert_eq!(
            daily_horoscope(ZodiacSign::Scorpio, date),
            "Trust your intuition today — it is guiding you well."
        );
        assert!(RETROGRADE_PROMPTS.contains(&"Communication may feel off — journal about any miscommunications today."));
        assert!(moon_prompts(MoonPhaseName::LastQuarter).contains(&"How can you forgive — yourself or someone else?"));
    }

    #[test]
    fn test_horoscope_changes_with_the_date() {
        let a = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap();
        assert_ne!(daily_horoscope(ZodiacSign::Pisces, a), daily_horoscope(ZodiacSign::Pisces, b));
    }

    #[test]
    fn test_retrograde_prompts_take_priority() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let prompt = journaling_prompt(Some(ZodiacSign::Leo), &sky(true), &mut rng);
            assert_eq!(prompt.source, "Mercury Retrograde");
            assert!(RETROGRADE_PROMPTS.contains(&prompt.prompt.as_str()));
        }
    }

    #[test]
    fn test_without_sun_sign_prompt_follows_the_moon() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let prompt = journaling_prompt(None, &sky(false), &mut rng);
            assert_eq!(prompt.source, "● New Moon");
            assert!(moon_prompts(MoonPhaseName::NewMoon).contains(&prompt.prompt.as_str()));
        }
    }

    #[test]
    fn test_sun_sign_theme_shows_up_sometimes() {
        let mut rng = StdRng::seed_from_u64(3);
        let sources: Vec<String> = (0..200)
            .map(|_| journaling_prompt(Some(ZodiacSign::Virgo), &sky(false), &mut rng).source)
            .collect();
        let season = sources.iter().filter(|s| *s == "Virgo season").count();
        assert!(season > 40 && season < 120, "season = {season}");
        assert!(sources.iter().all(|s| s == "Virgo season" || s == "● New Moon"));
    }
}
