//! Curated knowledge for everyday Malay words.
//!
//! Models regularly stumble on a handful of common words, either producing
//! no usable pronunciation or dropping sections. Hints steer the prompt and
//! patches fill whatever the model left as a placeholder.

use kamus_core::OverrideTable;
use kamus_types::{ExplanationRecord, NO_EXAMPLES, NO_EXPLANATION};

struct Hint {
    malay: &'static str,
    mandarin: &'static [&'static str],
    text: &'static str,
}

static HINTS: [Hint; 6] = [
    Hint {
        malay: "makan",
        mandarin: &["吃"],
        text: "Note that 'makan' is a very common Malay verb meaning 'to eat' (吃 in Chinese, pronounced 'chī').",
    },
    Hint {
        malay: "tidur",
        mandarin: &["睡觉"],
        text: "Note that 'tidur' is a common Malay verb meaning 'to sleep' (睡觉 in Chinese, pronounced 'shuì jiào').",
    },
    Hint {
        malay: "cantik",
        mandarin: &["美丽", "漂亮"],
        text: "Note that 'cantik' is a common Malay adjective meaning 'beautiful/pretty' (美丽 in Chinese, pronounced 'měi lì').",
    },
    Hint {
        malay: "muram",
        mandarin: &["忧郁"],
        text: "Note that 'muram' is a Malay adjective meaning 'gloomy/depressed' (忧郁 in Chinese, pronounced 'yōu yù').",
    },
    Hint {
        malay: "layu",
        mandarin: &["枯萎"],
        text: "Note that 'layu' is a Malay word meaning 'withered/wilted' (枯萎 in Chinese, pronounced 'kū wěi'). It specifically describes plants that have lost freshness and are drooping.",
    },
    Hint {
        malay: "gerun",
        mandarin: &["害怕"],
        text: "Note that 'gerun' is a Malay word meaning 'afraid/fearful' (害怕 in Chinese, pronounced 'hài pà').",
    },
];

struct Patch {
    malay: &'static str,
    mandarin: &'static [&'static str],
    pronunciation: &'static str,
    explanation: &'static str,
    examples: &'static str,
    /// `None` leaves the model's answer alone
    is_adjective: Option<bool>,
}

static PATCHES: [Patch; 12] = [
    Patch {
        malay: "layu",
        mandarin: &["枯萎"],
        pronunciation: "kū wěi",
        explanation: "'枯萎' dalam bahasa Mandarin menggambarkan keadaan tumbuhan yang kehilangan kesegaran dan kecergasan, menjadi kering dan layu. Ia biasanya digunakan untuk menggambarkan bunga, daun, atau sayuran yang mulai kering dan tidak segar lagi.",
        examples: "1. 花朵因缺水而枯萎了。\n   Bunga itu layu kerana kekurangan air.\n2. 不要让植物在阳光下枯萎。\n   Jangan biarkan tumbuhan layu di bawah cahaya matahari.\n3. 这些蔬菜已经开始枯萎了。\n   Sayur-sayuran ini sudah mula layu.",
        is_adjective: None,
    },
    Patch {
        malay: "gerun",
        mandarin: &["害怕"],
        pronunciation: "hài pà",
        explanation: "'害怕' dalam bahasa Mandarin bermaksud perasaan takut atau cemas terhadap sesuatu. Ia adalah satu perasaan ketakutan atau kekhuatiran yang dialami apabila seseorang menghadapi sesuatu yang dianggap sebagai ancaman atau bahaya.",
        examples: "1. 孩子害怕黑暗。\n   Kanak-kanak gerun akan kegelapan.\n2. 他对高处感到害怕。\n   Dia berasa gerun terhadap tempat tinggi.\n3. 不要害怕尝试新事物。\n   Jangan gerun untuk mencuba perkara baru.",
        is_adjective: None,
    },
    Patch {
        malay: "cantik",
        mandarin: &["美丽", "漂亮"],
        pronunciation: "měi lì",
        explanation: "'美丽' dalam bahasa Mandarin merujuk kepada sesuatu yang indah atau menarik dari segi penampilan. Ia digunakan untuk menggambarkan keindahan fizikal seseorang, pemandangan, atau objek yang menimbulkan rasa kagum dan kegembiraan bila dipandang.",
        examples: "1. 她是个美丽的女孩。\n   Dia seorang gadis yang cantik.\n2. 这里的风景非常美丽。\n   Pemandangan di sini sangat cantik.\n3. 那朵花开得很美丽。\n   Bunga itu mekar dengan cantiknya.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "pintar",
        mandarin: &["聪明"],
        pronunciation: "cōng míng",
        explanation: "'聪明' dalam bahasa Mandarin bermaksud mempunyai kemampuan mental yang baik, cerdas, atau bijak. Ia menggambarkan seseorang yang dapat memahami dan mempelajari sesuatu dengan cepat dan menyelesaikan masalah dengan efektif.",
        examples: "1. 她是班上最聪明的学生。\n   Dia pelajar paling pintar dalam kelasnya.\n2. 这个孩子非常聪明，学东西很快。\n   Anak ini sangat pintar, dia cepat belajar.\n3. 你必须聪明地解决这个问题。\n   Anda mesti menyelesaikan masalah ini dengan cara yang pintar.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "cepat",
        mandarin: &["快"],
        pronunciation: "kuài",
        explanation: "'快' dalam bahasa Mandarin bermaksud bergerak atau berlaku dengan kelajuan yang tinggi, atau dalam masa yang singkat. Ia juga boleh merujuk kepada sesuatu yang cekap atau efisien dalam penggunaan masa.",
        examples: "1. 他跑得很快。\n   Dia berlari dengan cepat.\n2. 请快点，我们要迟到了。\n   Tolong cepat sikit, kita akan terlambat.\n3. 这种方法比较快。\n   Cara ini lebih cepat.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "lambat",
        mandarin: &["慢"],
        pronunciation: "màn",
        explanation: "'慢' dalam bahasa Mandarin bermaksud bergerak atau berlaku dengan kelajuan yang rendah, atau mengambil masa yang lebih panjang daripada biasa. Ia juga boleh menggambarkan seseorang yang tidak cepat dalam tindakan atau pemikiran.",
        examples: "1. 他走路很慢。\n   Dia berjalan dengan lambat.\n2. 这个电脑运行得很慢。\n   Komputer ini beroperasi dengan lambat.\n3. 请慢慢说，我听不懂。\n   Tolong cakap dengan lebih lambat, saya tidak faham.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "tinggi",
        mandarin: &["高"],
        pronunciation: "gāo",
        explanation: "'高' dalam bahasa Mandarin merujuk kepada sesuatu yang mempunyai jarak yang jauh dari bawah ke atas, atau berada pada kedudukan yang lebih atas berbanding dengan tahap biasa. Ia boleh digunakan untuk menggambarkan ketinggian fizikal, tahap, atau darjah sesuatu.",
        examples: "1. 他个子很高。\n   Dia sangat tinggi.\n2. 这座山非常高。\n   Gunung ini sangat tinggi.\n3. 这个城市的生活成本很高。\n   Kos kehidupan di bandar ini sangat tinggi.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "pendek",
        mandarin: &["矮"],
        pronunciation: "ǎi",
        explanation: "'矮' dalam bahasa Mandarin merujuk kepada sesuatu yang mempunyai ketinggian yang rendah atau kurang daripada purata. Ia biasanya digunakan untuk menggambarkan ketinggian fizikal seseorang atau objek.",
        examples: "1. 他比我矮一点。\n   Dia sedikit lebih pendek daripada saya.\n2. 那棵树很矮。\n   Pokok itu sangat pendek.\n3. 矮个子的人也可以打篮球。\n   Orang yang pendek juga boleh bermain bola keranjang.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "baik",
        mandarin: &["好"],
        pronunciation: "hǎo",
        explanation: "'好' dalam bahasa Mandarin bermaksud bagus, memuaskan, atau memiliki kualiti yang tinggi. Ia juga boleh bermakna bersikap baik atau bersopan santun. Dalam konteks manusia, ia boleh merujuk kepada seseorang yang berbudi pekerti tinggi atau mempunyai moral yang baik.",
        examples: "1. 他是个好人。\n   Dia seorang yang baik.\n2. 这个电影很好看。\n   Filem ini sangat baik untuk ditonton.\n3. 祝你有个好心情。\n   Semoga anda mempunyai perasaan yang baik.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "marah",
        mandarin: &["生气"],
        pronunciation: "shēng qì",
        explanation: "'生气' dalam bahasa Mandarin bermaksud perasaan tidak senang atau tersinggung yang kuat, yang biasanya diikuti oleh kemarahan atau ketidakpuasan. Ia menggambarkan emosi di mana seseorang itu rasa tidak puas hati atau kesal terhadap sesuatu.",
        examples: "1. 他对我生气了。\n   Dia marah kepada saya.\n2. 别生气，这不是你的错。\n   Jangan marah, ini bukan salah kamu.\n3. 她很容易生气。\n   Dia mudah marah.",
        is_adjective: Some(false),
    },
    Patch {
        malay: "gembira",
        mandarin: &["快乐"],
        pronunciation: "kuài lè",
        explanation: "'快乐' dalam bahasa Mandarin merujuk kepada perasaan kegembiraan, kesenangan, atau kepuasan. Ia menggambarkan emosi positif yang dirasai apabila seseorang itu berpuas hati atau gembira dengan keadaan semasa.",
        examples: "1. 他总是很快乐。\n   Dia sentiasa sangat gembira.\n2. 祝你生日快乐。\n   Selamat hari jadi, semoga gembira.\n3. 我们快乐地度过了假期。\n   Kami telah menghabiskan cuti dengan gembira.",
        is_adjective: Some(true),
    },
    Patch {
        malay: "sedih",
        mandarin: &["悲伤"],
        pronunciation: "bēi shāng",
        explanation: "'悲伤' dalam bahasa Mandarin bermaksud perasaan sedih, dukacita, atau kesedihan. Ia menggambarkan emosi negatif yang dirasai apabila seseorang mengalami kehilangan, kekecewaan, atau situasi yang menyedihkan.",
        examples: "1. 听到这个消息，他感到非常悲伤。\n   Setelah mendengar berita itu, dia berasa sangat sedih.\n2. 电影的结局很悲伤。\n   Pengakhiran filem itu sangat sedih.\n3. 她的眼睛里充满了悲伤。\n   Matanya dipenuhi dengan kesedihan.",
        is_adjective: Some(true),
    },
];

fn holds_placeholder(text: &str, placeholder: &str) -> bool {
    text.contains(placeholder.trim_end_matches('.'))
}

impl Patch {
    fn apply(&self, mut record: ExplanationRecord) -> ExplanationRecord {
        if !record.is_incomplete() {
            return record;
        }

        tracing::info!("Enhancing explanation for word '{}'", self.malay);

        record.pronunciation = self.pronunciation.to_string();

        if holds_placeholder(&record.explanation, NO_EXPLANATION) {
            record.explanation = self.explanation.to_string();
        }
        if holds_placeholder(&record.examples, NO_EXAMPLES) {
            record.examples = self.examples.to_string();
        }
        if let Some(is_adjective) = self.is_adjective {
            record.is_adjective = is_adjective;
        }

        record
    }
}

/// Builds the override table for Malay to Mandarin lookups
pub struct MalayOverrides;

impl MalayOverrides {
    /// Every entry is registered under its Malay word and each Mandarin
    /// rendering, since lookups may arrive in either language.
    pub fn table() -> OverrideTable {
        let mut table = OverrideTable::new();

        for hint in &HINTS {
            for word in std::iter::once(hint.malay).chain(hint.mandarin.iter().copied()) {
                table = table.with_hint(word, hint.text);
            }
        }

        for patch in &PATCHES {
            for word in std::iter::once(patch.malay).chain(patch.mandarin.iter().copied()) {
                table = table.with_patch(word, move |record| patch.apply(record));
            }
        }

        tracing::debug!(
            "Malay overrides: {} hints, {} patches",
            table.hint_count(),
            table.patch_count()
        );
        table
    }
}
