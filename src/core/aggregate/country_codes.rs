//! Nationality to ISO 3166-1 alpha-2 country code lookup

use crate::config::DatasetConfig;
use std::collections::HashMap;

/// Built-in table keyed by lower-case nationality or country name
///
/// Demonyms come first since case line lists mostly record nationality.
/// Country names follow the country.io short names, with a few official
/// and common alternatives at the end.
static BUILTIN_CODES: &[(&str, &str)] = &[
    // Nationalities and permanent-resident labels
    ("singaporean", "sg"),
    ("singapore pr", "sg"),
    ("singapore permanent resident", "sg"),
    ("afghan", "af"),
    ("albanian", "al"),
    ("algerian", "dz"),
    ("argentine", "ar"),
    ("argentinian", "ar"),
    ("armenian", "am"),
    ("australian", "au"),
    ("austrian", "at"),
    ("azerbaijani", "az"),
    ("bahraini", "bh"),
    ("bangladeshi", "bd"),
    ("belarusian", "by"),
    ("belgian", "be"),
    ("bhutanese", "bt"),
    ("bolivian", "bo"),
    ("brazilian", "br"),
    ("british", "gb"),
    ("bruneian", "bn"),
    ("bulgarian", "bg"),
    ("cambodian", "kh"),
    ("cameroonian", "cm"),
    ("canadian", "ca"),
    ("chilean", "cl"),
    ("chinese", "cn"),
    ("colombian", "co"),
    ("croatian", "hr"),
    ("cuban", "cu"),
    ("cypriot", "cy"),
    ("czech", "cz"),
    ("danish", "dk"),
    ("dutch", "nl"),
    ("ecuadorian", "ec"),
    ("egyptian", "eg"),
    ("english", "gb"),
    ("estonian", "ee"),
    ("ethiopian", "et"),
    ("filipino", "ph"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("georgian", "ge"),
    ("german", "de"),
    ("ghanaian", "gh"),
    ("greek", "gr"),
    ("hong konger", "hk"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("indian", "in"),
    ("indonesian", "id"),
    ("iranian", "ir"),
    ("iraqi", "iq"),
    ("irish", "ie"),
    ("israeli", "il"),
    ("italian", "it"),
    ("jamaican", "jm"),
    ("japanese", "jp"),
    ("jordanian", "jo"),
    ("kazakh", "kz"),
    ("kazakhstani", "kz"),
    ("kenyan", "ke"),
    ("korean", "kr"),
    ("south korean", "kr"),
    ("kuwaiti", "kw"),
    ("kyrgyz", "kg"),
    ("lao", "la"),
    ("laotian", "la"),
    ("latvian", "lv"),
    ("lebanese", "lb"),
    ("lithuanian", "lt"),
    ("luxembourgish", "lu"),
    ("macanese", "mo"),
    ("malaysian", "my"),
    ("maldivian", "mv"),
    ("maltese", "mt"),
    ("mexican", "mx"),
    ("mongolian", "mn"),
    ("moroccan", "ma"),
    ("myanmarese", "mm"),
    ("nepalese", "np"),
    ("nepali", "np"),
    ("new zealander", "nz"),
    ("nigerian", "ng"),
    ("north korean", "kp"),
    ("norwegian", "no"),
    ("omani", "om"),
    ("pakistani", "pk"),
    ("palestinian", "ps"),
    ("peruvian", "pe"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("qatari", "qa"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("saudi", "sa"),
    ("scottish", "gb"),
    ("serbian", "rs"),
    ("slovak", "sk"),
    ("slovenian", "si"),
    ("south african", "za"),
    ("spanish", "es"),
    ("sri lankan", "lk"),
    ("sudanese", "sd"),
    ("swedish", "se"),
    ("swiss", "ch"),
    ("syrian", "sy"),
    ("taiwanese", "tw"),
    ("tajik", "tj"),
    ("tanzanian", "tz"),
    ("thai", "th"),
    ("timorese", "tl"),
    ("tunisian", "tn"),
    ("turkish", "tr"),
    ("turkmen", "tm"),
    ("ukrainian", "ua"),
    ("emirati", "ae"),
    ("american", "us"),
    ("uruguayan", "uy"),
    ("uzbek", "uz"),
    ("venezuelan", "ve"),
    ("vietnamese", "vn"),
    ("welsh", "gb"),
    ("yemeni", "ye"),
    ("zambian", "zm"),
    ("zimbabwean", "zw"),
    // ISO 3166-1 short names
    ("andorra", "ad"),
    ("united arab emirates", "ae"),
    ("afghanistan", "af"),
    ("antigua and barbuda", "ag"),
    ("anguilla", "ai"),
    ("albania", "al"),
    ("armenia", "am"),
    ("angola", "ao"),
    ("antarctica", "aq"),
    ("argentina", "ar"),
    ("american samoa", "as"),
    ("austria", "at"),
    ("australia", "au"),
    ("aruba", "aw"),
    ("aland islands", "ax"),
    ("azerbaijan", "az"),
    ("bosnia and herzegovina", "ba"),
    ("barbados", "bb"),
    ("bangladesh", "bd"),
    ("belgium", "be"),
    ("burkina faso", "bf"),
    ("bulgaria", "bg"),
    ("bahrain", "bh"),
    ("burundi", "bi"),
    ("benin", "bj"),
    ("saint barthelemy", "bl"),
    ("bermuda", "bm"),
    ("brunei", "bn"),
    ("bolivia", "bo"),
    ("bonaire, saint eustatius and saba", "bq"),
    ("brazil", "br"),
    ("bahamas", "bs"),
    ("bhutan", "bt"),
    ("bouvet island", "bv"),
    ("botswana", "bw"),
    ("belarus", "by"),
    ("belize", "bz"),
    ("canada", "ca"),
    ("cocos islands", "cc"),
    ("democratic republic of the congo", "cd"),
    ("central african republic", "cf"),
    ("republic of the congo", "cg"),
    ("switzerland", "ch"),
    ("ivory coast", "ci"),
    ("cook islands", "ck"),
    ("chile", "cl"),
    ("cameroon", "cm"),
    ("china", "cn"),
    ("colombia", "co"),
    ("costa rica", "cr"),
    ("cuba", "cu"),
    ("cape verde", "cv"),
    ("curacao", "cw"),
    ("christmas island", "cx"),
    ("cyprus", "cy"),
    ("czech republic", "cz"),
    ("germany", "de"),
    ("djibouti", "dj"),
    ("denmark", "dk"),
    ("dominica", "dm"),
    ("dominican republic", "do"),
    ("algeria", "dz"),
    ("ecuador", "ec"),
    ("estonia", "ee"),
    ("egypt", "eg"),
    ("western sahara", "eh"),
    ("eritrea", "er"),
    ("spain", "es"),
    ("ethiopia", "et"),
    ("finland", "fi"),
    ("fiji", "fj"),
    ("falkland islands", "fk"),
    ("micronesia", "fm"),
    ("faroe islands", "fo"),
    ("france", "fr"),
    ("gabon", "ga"),
    ("united kingdom", "gb"),
    ("grenada", "gd"),
    ("georgia", "ge"),
    ("french guiana", "gf"),
    ("guernsey", "gg"),
    ("ghana", "gh"),
    ("gibraltar", "gi"),
    ("greenland", "gl"),
    ("gambia", "gm"),
    ("guinea", "gn"),
    ("guadeloupe", "gp"),
    ("equatorial guinea", "gq"),
    ("greece", "gr"),
    ("south georgia and the south sandwich islands", "gs"),
    ("guatemala", "gt"),
    ("guam", "gu"),
    ("guinea-bissau", "gw"),
    ("guyana", "gy"),
    ("hong kong", "hk"),
    ("heard island and mcdonald islands", "hm"),
    ("honduras", "hn"),
    ("croatia", "hr"),
    ("haiti", "ht"),
    ("hungary", "hu"),
    ("indonesia", "id"),
    ("ireland", "ie"),
    ("israel", "il"),
    ("isle of man", "im"),
    ("india", "in"),
    ("british indian ocean territory", "io"),
    ("iraq", "iq"),
    ("iran", "ir"),
    ("iceland", "is"),
    ("italy", "it"),
    ("jersey", "je"),
    ("jamaica", "jm"),
    ("jordan", "jo"),
    ("japan", "jp"),
    ("kenya", "ke"),
    ("kyrgyzstan", "kg"),
    ("cambodia", "kh"),
    ("kiribati", "ki"),
    ("comoros", "km"),
    ("saint kitts and nevis", "kn"),
    ("north korea", "kp"),
    ("south korea", "kr"),
    ("kuwait", "kw"),
    ("cayman islands", "ky"),
    ("kazakhstan", "kz"),
    ("laos", "la"),
    ("lebanon", "lb"),
    ("saint lucia", "lc"),
    ("liechtenstein", "li"),
    ("sri lanka", "lk"),
    ("liberia", "lr"),
    ("lesotho", "ls"),
    ("lithuania", "lt"),
    ("luxembourg", "lu"),
    ("latvia", "lv"),
    ("libya", "ly"),
    ("morocco", "ma"),
    ("monaco", "mc"),
    ("moldova", "md"),
    ("montenegro", "me"),
    ("saint martin", "mf"),
    ("madagascar", "mg"),
    ("marshall islands", "mh"),
    ("macedonia", "mk"),
    ("mali", "ml"),
    ("myanmar", "mm"),
    ("mongolia", "mn"),
    ("macao", "mo"),
    ("northern mariana islands", "mp"),
    ("martinique", "mq"),
    ("mauritania", "mr"),
    ("montserrat", "ms"),
    ("malta", "mt"),
    ("mauritius", "mu"),
    ("maldives", "mv"),
    ("malawi", "mw"),
    ("mexico", "mx"),
    ("malaysia", "my"),
    ("mozambique", "mz"),
    ("namibia", "na"),
    ("new caledonia", "nc"),
    ("niger", "ne"),
    ("norfolk island", "nf"),
    ("nigeria", "ng"),
    ("nicaragua", "ni"),
    ("netherlands", "nl"),
    ("norway", "no"),
    ("nepal", "np"),
    ("nauru", "nr"),
    ("niue", "nu"),
    ("new zealand", "nz"),
    ("oman", "om"),
    ("panama", "pa"),
    ("peru", "pe"),
    ("french polynesia", "pf"),
    ("papua new guinea", "pg"),
    ("philippines", "ph"),
    ("pakistan", "pk"),
    ("poland", "pl"),
    ("saint pierre and miquelon", "pm"),
    ("pitcairn", "pn"),
    ("puerto rico", "pr"),
    ("palestinian territory", "ps"),
    ("portugal", "pt"),
    ("palau", "pw"),
    ("paraguay", "py"),
    ("qatar", "qa"),
    ("reunion", "re"),
    ("romania", "ro"),
    ("serbia", "rs"),
    ("russia", "ru"),
    ("rwanda", "rw"),
    ("saudi arabia", "sa"),
    ("solomon islands", "sb"),
    ("seychelles", "sc"),
    ("sudan", "sd"),
    ("sweden", "se"),
    ("singapore", "sg"),
    ("saint helena", "sh"),
    ("slovenia", "si"),
    ("svalbard and jan mayen", "sj"),
    ("slovakia", "sk"),
    ("sierra leone", "sl"),
    ("san marino", "sm"),
    ("senegal", "sn"),
    ("somalia", "so"),
    ("suriname", "sr"),
    ("south sudan", "ss"),
    ("sao tome and principe", "st"),
    ("el salvador", "sv"),
    ("sint maarten", "sx"),
    ("syria", "sy"),
    ("swaziland", "sz"),
    ("turks and caicos islands", "tc"),
    ("chad", "td"),
    ("french southern territories", "tf"),
    ("togo", "tg"),
    ("thailand", "th"),
    ("tajikistan", "tj"),
    ("tokelau", "tk"),
    ("east timor", "tl"),
    ("turkmenistan", "tm"),
    ("tunisia", "tn"),
    ("tonga", "to"),
    ("turkey", "tr"),
    ("trinidad and tobago", "tt"),
    ("tuvalu", "tv"),
    ("taiwan", "tw"),
    ("tanzania", "tz"),
    ("ukraine", "ua"),
    ("uganda", "ug"),
    ("united states minor outlying islands", "um"),
    ("united states", "us"),
    ("uruguay", "uy"),
    ("uzbekistan", "uz"),
    ("vatican", "va"),
    ("saint vincent and the grenadines", "vc"),
    ("venezuela", "ve"),
    ("british virgin islands", "vg"),
    ("u.s. virgin islands", "vi"),
    ("vietnam", "vn"),
    ("vanuatu", "vu"),
    ("wallis and futuna", "wf"),
    ("samoa", "ws"),
    ("kosovo", "xk"),
    ("yemen", "ye"),
    ("mayotte", "yt"),
    ("south africa", "za"),
    ("zambia", "zm"),
    ("zimbabwe", "zw"),
    // Other common names
    ("bosnia", "ba"),
    ("cote d'ivoire", "ci"),
    ("côte d'ivoire", "ci"),
    ("czechia", "cz"),
    ("great britain", "gb"),
    ("uk", "gb"),
    ("korea", "kr"),
    ("republic of korea", "kr"),
    ("lao pdr", "la"),
    ("north macedonia", "mk"),
    ("burma", "mm"),
    ("palestine", "ps"),
    ("russian federation", "ru"),
    ("eswatini", "sz"),
    ("timor-leste", "tl"),
    ("usa", "us"),
    ("united states of america", "us"),
    ("vatican city", "va"),
    ("viet nam", "vn"),
];

/// Resolved code for one nationality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode {
    pub code: String,
    /// The nationality had no mapping and the default code was used
    pub fallback: bool,
}

/// Country code resolver with configurable overrides and default
#[derive(Debug, Clone)]
pub struct CountryCodes {
    overrides: HashMap<String, String>,
    default_code: String,
}

impl CountryCodes {
    pub fn new(overrides: HashMap<String, String>, default_code: impl Into<String>) -> Self {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(name, code)| (normalize_key(&name), code))
                .collect(),
            default_code: default_code.into(),
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(
            config
                .country_code_overrides
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            config.default_country_code.clone(),
        )
    }

    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// Resolves `nationality`, falling back to the default code
    pub fn resolve(&self, nationality: &str) -> CountryCode {
        let key = normalize_key(nationality);

        if let Some(code) = self.overrides.get(&key) {
            return CountryCode {
                code: code.clone(),
                fallback: false,
            };
        }

        match BUILTIN_CODES.iter().find(|(name, _)| *name == key) {
            Some((_, code)) => CountryCode {
                code: (*code).to_string(),
                fallback: false,
            },
            None => CountryCode {
                code: self.default_code.clone(),
                fallback: true,
            },
        }
    }
}

impl Default for CountryCodes {
    fn default() -> Self {
        Self::from_config(&DatasetConfig::default())
    }
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Singapore", "sg")]
    #[test_case("Singapore PR", "sg")]
    #[test_case("Bangladesh", "bd")]
    #[test_case("China", "cn")]
    #[test_case("India", "in")]
    #[test_case("Malaysia", "my")]
    #[test_case("Indonesia", "id")]
    #[test_case(" united kingdom ", "gb")]
    #[test_case("Romania", "ro")]
    #[test_case("Kazakhstan", "kz")]
    #[test_case("Czech Republic", "cz")]
    #[test_case("Hungary", "hu")]
    #[test_case("Bhutan", "bt")]
    #[test_case("Timor-Leste", "tl")]
    #[test_case("Morocco", "ma")]
    #[test_case("Swedish", "se")]
    #[test_case("Sri Lankan", "lk")]
    #[test_case("Ivory Coast", "ci")]
    #[test_case("Democratic Republic of the Congo", "cd")]
    #[test_case("Trinidad and Tobago", "tt")]
    #[test_case("Uruguay", "uy")]
    #[test_case("Fiji", "fj")]
    #[test_case("American", "us")]
    fn test_builtin_codes(nationality: &str, expected: &str) {
        let resolved = CountryCodes::default().resolve(nationality);
        assert_eq!(resolved.code, expected);
        assert!(!resolved.fallback);
    }

    #[test]
    fn test_unmapped_uses_default() {
        let resolved = CountryCodes::default().resolve("Atlantis");
        assert_eq!(resolved.code, "sg");
        assert!(resolved.fallback);
    }

    #[test]
    fn test_overrides_win_over_builtin() {
        let codes = CountryCodes::new(
            HashMap::from([("China".to_string(), "hk".to_string())]),
            "xx",
        );
        assert_eq!(codes.resolve("china").code, "hk");
        assert_eq!(codes.resolve("Atlantis").code, "xx");
        assert_eq!(codes.default_code(), "xx");
    }

    #[test]
    fn test_builtin_table_codes_are_well_formed() {
        let mut names = std::collections::HashSet::new();
        for (name, code) in BUILTIN_CODES {
            assert_eq!(name.to_lowercase(), *name);
            assert_eq!(name.trim(), *name);
            assert_eq!(code.len(), 2, "{name}");
            assert!(code.chars().all(|c| c.is_ascii_lowercase()), "{name}");
            assert!(names.insert(*name), "duplicate entry {name}");
        }
    }

    #[test]
    fn test_builtin_table_covers_every_assigned_code() {
        let codes: std::collections::HashSet<&str> =
            BUILTIN_CODES.iter().map(|(_, code)| *code).collect();
        // 249 ISO 3166-1 assignments plus Kosovo
        assert_eq!(codes.len(), 250);
    }
}
