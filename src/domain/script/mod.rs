//! Script Domain Module
//!
//! Everything needed to turn one client utterance into a reply script:
//!
//! - **Intent**: the fixed objection categories and their keyword tables
//! - **IntentClassifier**: keyword scoring with a fuzzy fallback
//! - **SlotExtractor**: regex rules pulling budget, rooms, metro, time, district and goal
//! - **ScriptLibrary**: immutable tone phrase pools and per-intent frame templates
//! - **ReplyComposer**: picks phrases through a [`ChoiceSource`] and renders the 4-line script
//!
//! # Example
//!
//! ```
//! use skriptolog::domain::script::{
//!     FixedChoice, IntentClassifier, KeywordIntentClassifier, ReplyComposer, ScriptLibrary,
//!     SlotExtractor, Tone,
//! };
//! use std::sync::Arc;
//!
//! let text = "дорого, до 15 млн, студия, сегодня";
//! let intent = KeywordIntentClassifier.classify(text);
//! let slots = SlotExtractor::new().extract(text);
//! let composer = ReplyComposer::new(ScriptLibrary::standard(), Arc::new(FixedChoice::new(0)));
//! let reply = composer.compose(intent, Tone::Confident, &slots);
//! assert_eq!(reply.render().lines().count(), 4);
//! ```

pub mod choice;
pub mod classifier;
pub mod composer;
pub mod extractor;
pub mod intent;
pub mod library;
pub mod similarity;
pub mod slots;
pub mod tone;

pub use choice::{ChoiceSource, FixedChoice, SeededChoice, ThreadRngChoice};
pub use classifier::{IntentClassifier, KeywordIntentClassifier};
pub use composer::{ComposedReply, ReplyComposer};
pub use extractor::SlotExtractor;
pub use intent::Intent;
pub use library::{ScriptLibrary, ToneProfile, FALLBACK_FRAME};
pub use slots::{SlotName, SlotSet};
pub use tone::Tone;
