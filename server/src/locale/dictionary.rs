//! Per-locale display strings

use super::Locale;

/// Labels of the three feature tiles on the home page
#[derive(Debug, Clone, Copy)]
pub struct FeatureLabels {
    pub instant: &'static str,
    pub quality: &'static str,
    pub secure: &'static str,
}

/// Resolved display strings for one locale
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_button: &'static str,
    /// Label of the original photo in the comparison slider
    pub before: &'static str,
    /// Label of the coloring page in the comparison slider
    pub after: &'static str,
    pub download: &'static str,
    pub features: FeatureLabels,
}

static EN: Dictionary = Dictionary {
    title: "Photo to Coloring Page Converter",
    subtitle: "Turn your photos into beautiful coloring pages in seconds.",
    upload_button: "Upload Photo",
    before: "Original Photo",
    after: "Coloring Page",
    download: "Download Printable",
    features: FeatureLabels {
        instant: "Instant Conversion",
        quality: "High Quality Lines",
        secure: "Private & Secure",
    },
};

static ES: Dictionary = Dictionary {
    title: "Convertidor de Foto a Página para Colorear",
    subtitle: "Convierte tus fotos en hermosas páginas para colorear en segundos.",
    upload_button: "Subir Foto",
    before: "Foto Original",
    after: "Página para Colorear",
    download: "Descargar Imprimible",
    features: FeatureLabels {
        instant: "Conversión Instantánea",
        quality: "Líneas de Alta Calidad",
        secure: "Privado y Seguro",
    },
};

static DE: Dictionary = Dictionary {
    title: "Foto in Malvorlage Konverter",
    subtitle: "Verwandeln Sie Ihre Fotos in Sekundenschnelle in schöne Malvorlagen.",
    upload_button: "Foto Hochladen",
    before: "Originalfoto",
    after: "Malvorlage",
    download: "Druckversion Herunterladen",
    features: FeatureLabels {
        instant: "Sofortige Umwandlung",
        quality: "Hochwertige Linien",
        secure: "Privat & Sicher",
    },
};

static JA: Dictionary = Dictionary {
    title: "写真・ぬりえ変換ツール",
    subtitle: "写真を数秒で美しいぬりえに変換します。",
    upload_button: "写真をアップロード",
    before: "元の写真",
    after: "ぬりえ",
    download: "印刷用をダウンロード",
    features: FeatureLabels {
        instant: "瞬時に変換",
        quality: "高品質なライン",
        secure: "プライバシー保護",
    },
};

impl Dictionary {
    pub fn for_locale(locale: Locale) -> &'static Dictionary {
        match locale {
            Locale::En => &EN,
            Locale::Es => &ES,
            Locale::De => &DE,
            Locale::Ja => &JA,
        }
    }
}
