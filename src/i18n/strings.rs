//! Localized apply-form strings.
//!
//! Languages without a table (Mandarin, French, German) fall back to English.

use crate::i18n::Language;

/// User-facing strings of the application form for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyFormStrings {
    // ==================== Field Labels ====================
    /// Label of the applicant name field
    pub your_name: &'static str,

    /// Label of the applicant email field
    pub your_email: &'static str,

    // ==================== Validation Messages ====================
    /// Appended to a field label when the field is blank
    pub field_required: &'static str,

    /// Shown when the email does not look like an address
    pub invalid_email: &'static str,

    // ==================== Confirmation ====================
    /// Heading shown once an application is accepted
    pub application_submitted: &'static str,

    /// Follow-up text under the confirmation heading
    pub thank_you_message: &'static str,
}

impl ApplyFormStrings {
    /// Strings for `language`, or English when it has no table.
    pub fn for_language(language: Language) -> &'static ApplyFormStrings {
        match language.code() {
            "hi" => &HINDI_STRINGS,
            "es" => &SPANISH_STRINGS,
            "ta" => &TAMIL_STRINGS,
            "te" => &TELUGU_STRINGS,
            "bn" => &BENGALI_STRINGS,
            "mr" => &MARATHI_STRINGS,
            "ml" => &MALAYALAM_STRINGS,
            "kn" => &KANNADA_STRINGS,
            "gu" => &GUJARATI_STRINGS,
            "pa" => &PUNJABI_STRINGS,
            _ => &ENGLISH_STRINGS,
        }
    }
}

pub const ENGLISH_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "Your Name",
    your_email: "Your Email",
    field_required: "This field is required.",
    invalid_email: "Please enter a valid email address.",
    application_submitted: "Application Submitted!",
    thank_you_message:
        "Thank you for applying. The job poster will contact you if they are interested.",
};

pub const HINDI_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "आपका नाम",
    your_email: "आपका ईमेल",
    field_required: "यह फ़ील्ड आवश्यक है।",
    invalid_email: "कृपया एक वैध ईमेल पता दर्ज करें।",
    application_submitted: "आवेदन जमा किया गया!",
    thank_you_message:
        "आवेदन करने के लिए धन्यवाद। यदि नौकरी पोस्टर रुचि रखता है तो वह आपसे संपर्क करेगा।",
};

pub const SPANISH_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "Tu nombre",
    your_email: "Tu correo electrónico",
    field_required: "Este campo es obligatorio.",
    invalid_email: "Por favor, introduce una dirección de correo electrónico válida.",
    application_submitted: "¡Solicitud enviada!",
    thank_you_message: "Gracias por postularte. El anunciante del trabajo se pondrá en contacto contigo si está interesado.",
};

pub const TAMIL_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "உங்கள் பெயர்",
    your_email: "உங்கள் மின்னஞ்சல்",
    field_required: "இந்த புலம் தேவை.",
    invalid_email: "சரியான மின்னஞ்சல் முகவரியை உள்ளிடவும்.",
    application_submitted: "விண்ணப்பம் சமர்ப்பிக்கப்பட்டது!",
    thank_you_message: "விண்ணப்பித்ததற்கு நன்றி. வேலை இடுகையாளர் ஆர்வமாக இருந்தால் உங்களைத் தொடர்புகொள்வார்.",
};

pub const TELUGU_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "మీ పేరు",
    your_email: "మీ ఇమెయిల్",
    field_required: "ఈ ఫీల్డ్ అవసరం.",
    invalid_email: "దయచేసి చెల్లుబాటు అయ్యే ఇమెయిల్ చిరునామాను నమోదు చేయండి.",
    application_submitted: "దరఖాస్తు సమర్పించబడింది!",
    thank_you_message:
        "దరఖాస్తు చేసినందుకు ధన్యవాదాలు. ఉద్యోగ పోస్టర్ ఆసక్తిగా ఉంటే మిమ్మల్ని సంప్రదిస్తారు.",
};

pub const BENGALI_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "আপনার নাম",
    your_email: "আপনার ইমেল",
    field_required: "এই ক্ষেত্রটি আবশ্যক।",
    invalid_email: "অনুগ্রহ করে একটি বৈধ ইমেল ঠিকানা লিখুন।",
    application_submitted: "আবেদন জমা দেওয়া হয়েছে!",
    thank_you_message: "আবেদন করার জন্য ধন্যবাদ। চাকরির পোস্টার আগ্রহী হলে আপনার সাথে যোগাযোগ করবে।",
};

pub const MARATHI_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "तुमचे नाव",
    your_email: "तुमचा ईमेल",
    field_required: "हे फील्ड आवश्यक आहे.",
    invalid_email: "कृपया वैध ईमेल पत्ता प्रविष्ट करा.",
    application_submitted: "अर्ज सादर केला!",
    thank_you_message:
        "अर्ज केल्याबद्दल धन्यवाद. नोकरी पोस्ट करणारा स्वारस्य असल्यास तुमच्याशी संपर्क साधेल.",
};

pub const MALAYALAM_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "നിങ്ങളുടെ പേര്",
    your_email: "നിങ്ങളുടെ ഇമെയിൽ",
    field_required: "ഈ ഫീൽഡ് ആവശ്യമാണ്.",
    invalid_email: "ദയവായി ഒരു സാധുവായ ഇമെയിൽ വിലാസം നൽകുക.",
    application_submitted: "അപേക്ഷ സമർപ്പിച്ചു!",
    thank_you_message:
        "അപേക്ഷിച്ചതിന് നന്ദി. താല്പര്യമുണ്ടെങ്കിൽ തൊഴിൽദാതാവ് നിങ്ങളുമായി ബന്ധപ്പെടുന്നതാണ്.",
};

pub const KANNADA_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "ನಿಮ್ಮ ಹೆಸರು",
    your_email: "ನಿಮ್ಮ ಇಮೇಲ್",
    field_required: "ಈ ಕ್ಷೇತ್ರ ಅಗತ್ಯವಿದೆ.",
    invalid_email: "ದಯವಿಟ್ಟು ಮಾನ್ಯವಾದ ಇಮೇಲ್ ವಿಳಾಸವನ್ನು ನಮೂದಿಸಿ.",
    application_submitted: "ಅರ್ಜಿಯನ್ನು ಸಲ್ಲಿಸಲಾಗಿದೆ!",
    thank_you_message:
        "ಅರ್ಜಿ ಸಲ್ಲಿಸಿದ್ದಕ್ಕಾಗಿ ಧನ್ಯವಾದಗಳು. ಉದ್ಯೋಗ ಪೋಸ್ಟರ್ ಆಸಕ್ತಿ ಹೊಂದಿದ್ದರೆ ನಿಮ್ಮನ್ನು ಸಂಪರ್ಕಿಸುತ್ತಾರೆ.",
};

pub const GUJARATI_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "તમારું નામ",
    your_email: "તમારું ઇમેઇલ",
    field_required: "આ ક્ષેત્ર જરૂરી છે.",
    invalid_email: "કૃપા કરીને માન્ય ઇમેઇલ સરનામું દાખલ કરો.",
    application_submitted: "અરજી સબમિટ કરવામાં આવી!",
    thank_you_message: "અરજી કરવા બદલ આભાર. જોબ પોસ્ટરને રસ હશે તો તમારો સંપર્ક કરશે.",
};

pub const PUNJABI_STRINGS: ApplyFormStrings = ApplyFormStrings {
    your_name: "ਤੁਹਾਡਾ ਨਾਮ",
    your_email: "ਤੁਹਾਡੀ ਈਮੇਲ",
    field_required: "ਇਹ ਖੇਤਰ ਲੋੜੀਂਦਾ ਹੈ।",
    invalid_email: "ਕਿਰਪਾ ਕਰਕੇ ਇੱਕ ਵੈਧ ਈਮੇਲ ਪਤਾ ਦਾਖਲ ਕਰੋ।",
    application_submitted: "ਅਰਜ਼ੀ ਜਮ੍ਹਾਂ ਹੋ ਗਈ!",
    thank_you_message:
        "ਅਰਜ਼ੀ ਦੇਣ ਲਈ ਤੁਹਾਡਾ ਧੰਨਵਾਦ। ਜੇਕਰ ਨੌਕਰੀ ਪੋਸਟਰ ਦਿਲਚਸਪੀ ਰੱਖਦਾ ਹੈ ਤਾਂ ਉਹ ਤੁਹਾਡੇ ਨਾਲ ਸੰਪਰਕ ਕਰੇਗਾ।",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageRegistry;

    const ALL_TABLES: [&ApplyFormStrings; 11] = [
        &ENGLISH_STRINGS,
        &HINDI_STRINGS,
        &SPANISH_STRINGS,
        &TAMIL_STRINGS,
        &TELUGU_STRINGS,
        &BENGALI_STRINGS,
        &MARATHI_STRINGS,
        &MALAYALAM_STRINGS,
        &KANNADA_STRINGS,
        &GUJARATI_STRINGS,
        &PUNJABI_STRINGS,
    ];

    #[test]
    fn test_no_string_is_empty() {
        for table in ALL_TABLES {
            for value in [
                table.your_name,
                table.your_email,
                table.field_required,
                table.invalid_email,
                table.application_submitted,
                table.thank_you_message,
            ] {
                assert!(!value.trim().is_empty(), "{:?} has an empty string", table);
            }
        }
    }

    #[test]
    fn test_localized_tables_differ_from_english() {
        for table in &ALL_TABLES[1..] {
            assert_ne!(table.field_required, ENGLISH_STRINGS.field_required);
        }
    }

    #[test]
    fn test_lookup_by_language() {
        assert_eq!(ApplyFormStrings::for_language(Language::HINDI), &HINDI_STRINGS);
        assert_eq!(ApplyFormStrings::for_language(Language::TAMIL).your_name, "உங்கள் பெயர்");
        assert_eq!(
            ApplyFormStrings::for_language(Language::from_code("pa").unwrap()),
            &PUNJABI_STRINGS
        );
    }

    #[test]
    fn test_languages_without_table_fall_back_to_english() {
        for code in ["zh", "fr", "de"] {
            let language = Language::from_code(code).unwrap();
            assert_eq!(ApplyFormStrings::for_language(language), &ENGLISH_STRINGS);
        }
    }

    #[test]
    fn test_every_registry_language_resolves() {
        for config in LanguageRegistry::get().list_enabled() {
            let language = Language::from_code(config.code).unwrap();
            assert!(!ApplyFormStrings::for_language(language).your_name.is_empty());
        }
    }
}
