//! Immutable phrase and template tables.
//!
//! The standard library is built once per process and shared read-only.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::intent::Intent;
use super::tone::Tone;

/// Frame used when an intent has no template pool.
pub const FALLBACK_FRAME: &str = "Подберу точечно под ваш запрос.";

/// Phrase pools owned by one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneProfile {
    pub hooks: Vec<&'static str>,
    pub asks: Vec<&'static str>,
    pub closes: Vec<&'static str>,
}

/// Tone phrase pools plus per-intent frame templates.
#[derive(Debug, Clone)]
pub struct ScriptLibrary {
    tones: HashMap<Tone, ToneProfile>,
    frames: HashMap<Intent, Vec<&'static str>>,
}

static STANDARD: Lazy<ScriptLibrary> = Lazy::new(|| {
    let tones = HashMap::from([
        (
            Tone::Soft,
            ToneProfile {
                hooks: vec!["Понимаю вас.", "Всё ок, давайте спокойно посмотрим."],
                asks: vec!["Чуть уточню, чтобы попасть в цель:", "Задам 1–2 коротких вопроса:"],
                closes: vec![
                    "Соберу 3 точных варианта и пришлю сегодня — подойдёт?",
                    "Договоримся на короткий созвон на 5 минут?",
                ],
            },
        ),
        (
            Tone::Confident,
            ToneProfile {
                hooks: vec![
                    "Сделаем быстро и по делу.",
                    "Возьму на себя подбор, чтобы вы не тратили время.",
                ],
                asks: vec!["Проверьте, верно ли понимаю:", "Уточню ключевые параметры:"],
                closes: vec![
                    "Покажу 2 сильных варианта, согласуем время связи.",
                    "Зафиксирую слот на сегодня 18:00 — удобно?",
                ],
            },
        ),
        (
            Tone::Expert,
            ToneProfile {
                hooks: vec![
                    "Сфокусируемся на факторах, что реально влияют на цену.",
                    "Соберу выборку с акциями и корректной сопоставимостью.",
                ],
                asks: vec!["Нужны 3 параметра:", "Подтвердите ключевые границы:"],
                closes: vec![
                    "Отправлю сравнение на 1 экран + рекомендацию. Ок?",
                    "Сделаю бенчмарк и выйду с цифрами.",
                ],
            },
        ),
    ]);

    let frames = HashMap::from([
        (
            Intent::NotInterested,
            vec!["Работаю по новостройкам Москвы, без лишних рассылок. Подберу ровно под {goal}."],
        ),
        (
            Intent::BusyLater,
            vec!["Подготовлю 2–3 варианта под {budget} {district} {rooms} и свяжемся {time}."],
        ),
        (
            Intent::DontNeed,
            vec!["Если будете смотреть, ориентир по бюджету {budget} и до метро {metro} — так попаду точнее."],
        ),
        (
            Intent::SelfSearch,
            vec!["Часто цена «гуляет» из‑за корпуса/этажа/отделки. Пришлите ссылку — проверю и добьюсь паритета."],
        ),
        (
            Intent::OtherAgent,
            vec!["Останемся в вашей связке: точечно улучшу условия без смены агента — так комфортнее."],
        ),
        (
            Intent::Expensive,
            vec!["Есть акции и поэтапный платёж у застройщиков. Покажу путь «строго в {budget}» и «класс выше со скидкой»."],
        ),
        (
            Intent::ThinkLater,
            vec!["За месяц в сегменте мог быть рост. Зафиксируем 2–3 лота и включим уведомления по цене."],
        ),
        (
            Intent::NoMortgage,
            vec!["Посчитаю субсидии и альтернативные банки под первый взнос. Срок одобрения учтём."],
        ),
        (
            Intent::JustBrowsing,
            vec!["Соберу лёгкую подборку: 3 лучших по {goal} и {metro}."],
        ),
        (
            Intent::SendWhatsapp,
            vec!["Пришлю 3 точных варианта в WhatsApp. Чтобы не грузить, уточню 2 момента и попаду в цель."],
        ),
    ]);

    ScriptLibrary::new(tones, frames)
});

impl ScriptLibrary {
    pub fn new(
        tones: HashMap<Tone, ToneProfile>,
        frames: HashMap<Intent, Vec<&'static str>>,
    ) -> Self {
        Self { tones, frames }
    }

    /// The process-wide default tables.
    pub fn standard() -> &'static ScriptLibrary {
        &STANDARD
    }

    /// Phrase pools for a tone, falling back to the confident tone.
    pub fn tone(&self, tone: Tone) -> Option<&ToneProfile> {
        self.tones
            .get(&tone)
            .or_else(|| self.tones.get(&Tone::default()))
    }

    /// Frame templates for an intent; `None` when no pool is configured.
    pub fn frames(&self, intent: Intent) -> Option<&[&'static str]> {
        self.frames
            .get(&intent)
            .map(Vec::as_slice)
            .filter(|pool| !pool.is_empty())
    }
}
