use std::collections::HashMap;

use kamus_types::PromptSpec;

use crate::{InferenceClient, InferenceError, InferenceParams};

struct PreloadedAnswer {
    explanation: &'static str,
    pronunciation: &'static str,
    examples: &'static str,
    is_adjective: bool,
}

/// Inference backend that never leaves the process.
///
/// Answers a handful of common Mandarin words from a built-in table and a
/// generic answer for everything else, rendered in the same sectioned text
/// format a real model is asked to produce.
pub struct OfflineClient {
    answers: HashMap<&'static str, PreloadedAnswer>,
}

impl OfflineClient {
    pub fn new() -> Self {
        let mut answers = HashMap::new();

        answers.insert(
            "你好",
            PreloadedAnswer {
                explanation: "Salam atau ucapan sapaan yang biasa digunakan untuk menyapa seseorang. Ia bermakna 'Hello' atau 'Hi' dalam Bahasa Inggeris.",
                pronunciation: "nǐ hǎo",
                examples: "1. 你好，我的名字是李明。\n   Hello, nama saya adalah Li Ming.\n2. 早上好，你好吗？\n   Selamat pagi, apa khabar?\n3. 请你好好学习。\n   Sila belajar dengan baik.",
                is_adjective: false,
            },
        );
        answers.insert(
            "谢谢",
            PreloadedAnswer {
                explanation: "Ungkapan terima kasih dalam Bahasa Mandarin. Digunakan untuk menunjukkan penghargaan atau rasa terima kasih kepada seseorang.",
                pronunciation: "xiè xiè",
                examples: "1. 谢谢你的帮助。\n   Terima kasih atas bantuan anda.\n2. 非常谢谢你！\n   Terima kasih banyak!\n3. 我要谢谢我的父母。\n   Saya ingin berterima kasih kepada ibu bapa saya.",
                is_adjective: false,
            },
        );
        answers.insert(
            "朋友",
            PreloadedAnswer {
                explanation: "Perkataan untuk 'kawan' atau 'sahabat'. Merujuk kepada seseorang yang mempunyai hubungan rapat dan baik dengan anda.",
                pronunciation: "péng yǒu",
                examples: "1. 他是我的好朋友。\n   Dia adalah kawan baik saya.\n2. 我们是朋友。\n   Kami adalah kawan.\n3. 朋友们都来参加派对。\n   Semua kawan datang ke majlis.",
                is_adjective: false,
            },
        );
        answers.insert(
            "学习",
            PreloadedAnswer {
                explanation: "Bermaksud 'belajar' atau 'mengkaji'. Merujuk kepada proses mendapatkan pengetahuan atau kemahiran baru.",
                pronunciation: "xué xí",
                examples: "1. 我在学习中文。\n   Saya sedang belajar Bahasa Mandarin.\n2. 学习需要时间。\n   Pembelajaran memerlukan masa.\n3. 他喜欢学习新技能。\n   Dia suka belajar kemahiran baru.",
                is_adjective: false,
            },
        );
        answers.insert(
            "工作",
            PreloadedAnswer {
                explanation: "Bermaksud 'kerja' atau 'pekerjaan'. Boleh digunakan sebagai kata nama atau kata kerja.",
                pronunciation: "gōng zuò",
                examples: "1. 我的工作很有趣。\n   Kerja saya sangat menarik.\n2. 他在银行工作。\n   Dia bekerja di bank.\n3. 这份工作需要经验。\n   Pekerjaan ini memerlukan pengalaman.",
                is_adjective: false,
            },
        );
        answers.insert(
            "美丽",
            PreloadedAnswer {
                explanation: "Bermaksud 'cantik' atau 'indah'. Digunakan untuk menerangkan sesuatu yang mempunyai penampilan yang menyenangkan.",
                pronunciation: "měi lì",
                examples: "1. 这是一个美丽的花园。\n   Ini adalah taman yang cantik.\n2. 她有一双美丽的眼睛。\n   Dia mempunyai sepasang mata yang cantik.\n3. 中国有很多美丽的风景。\n   China mempunyai banyak pemandangan yang indah.",
                is_adjective: true,
            },
        );

        tracing::info!("Offline backend preloaded {} answers", answers.len());
        Self { answers }
    }

    pub fn preloaded(&self, word: &str) -> bool {
        self.answers.contains_key(word)
    }

    fn render(&self, word: &str) -> String {
        match self.answers.get(word) {
            Some(answer) => render_sections(
                answer.explanation,
                answer.pronunciation,
                answer.examples,
                answer.is_adjective,
            ),
            None => {
                tracing::debug!("No preloaded answer for '{}', using generic text", word);
                let explanation = format!(
                    "Ini adalah terjemahan generik untuk perkataan '{word}'. Untuk mendapatkan penjelasan terperinci, gunakan penyedia 'ollama'."
                );
                let pronunciation = format!("Pinyin tidak tersedia untuk '{word}'");
                render_sections(
                    &explanation,
                    &pronunciation,
                    "1. 这是一个例子。\n   Ini adalah contoh.\n2. 请使用这个词。\n   Sila gunakan perkataan ini.\n3. 我们学习中文。\n   Kami belajar bahasa Mandarin.",
                    false,
                )
            }
        }
    }
}

impl Default for OfflineClient {
    fn default() -> Self {
        Self::new()
    }
}

fn render_sections(explanation: &str, pronunciation: &str, examples: &str, adjective: bool) -> String {
    let adjective = if adjective { "YES" } else { "NO" };
    format!(
        "EXPLANATION:\n{explanation}\n\nPRONUNCIATION:\n{pronunciation}\n\nEXAMPLES:\n{examples}\n\nIS_ADJECTIVE:\n{adjective}"
    )
}

#[async_trait::async_trait]
impl InferenceClient for OfflineClient {
    async fn complete(
        &self,
        prompt: &PromptSpec,
        _params: &InferenceParams,
    ) -> Result<String, InferenceError> {
        Ok(self.render(prompt.subject.trim()))
    }

    fn backend(&self) -> &str {
        "offline"
    }
}
