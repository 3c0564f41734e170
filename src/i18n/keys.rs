pub const APP_NAME: &str = "header.appName";
pub const TAGLINE: &str = "header.tagline";
pub const HIGH_CONTRAST: &str = "header.highContrast";
pub const LARGE_TEXT: &str = "header.largeText";
pub const LANGUAGE: &str = "header.language";
pub const ENGLISH: &str = "header.english";
pub const HINDI: &str = "header.hindi";

pub const NAV_FINDER: &str = "nav.finder";
pub const NAV_DOCS: &str = "nav.docs";
pub const NAV_CHAT: &str = "nav.chat";
pub const NAV_COMMUNITY: &str = "nav.community";

pub const ALERTS_TITLE: &str = "alerts.title";
pub const ALERTS_CONTENT: &str = "alerts.content";

pub const FINDER_TITLE: &str = "finder.title";
pub const DISABILITY_TYPE: &str = "finder.disabilityType";
pub const SELECT_DISABILITY: &str = "finder.selectDisability";
pub const AGE: &str = "finder.age";
pub const ENTER_AGE: &str = "finder.enterAge";
pub const LOCATION: &str = "finder.location";
pub const ENTER_LOCATION: &str = "finder.enterLocation";
pub const USE_VOICE_INPUT: &str = "finder.useVoiceInput";
pub const VOICE_INPUT_ACTIVE: &str = "finder.voiceInputActive";
pub const VOICE_INPUT_FAILED: &str = "finder.voiceInputFailed";
pub const FIND_SCHEMES: &str = "finder.findSchemes";
pub const FINDING_SCHEMES: &str = "finder.findingSchemes";
pub const NO_SCHEMES_FOUND: &str = "finder.noSchemesFound";
pub const ERROR_FINDING_SCHEMES: &str = "finder.errorFindingSchemes";

pub const ELIGIBILITY: &str = "scheme.eligibility";
pub const BENEFITS: &str = "scheme.benefits";
pub const DOCUMENTS_REQUIRED: &str = "scheme.documentsRequired";
pub const APPLICATION_PROCESS: &str = "scheme.applicationProcess";
pub const READ_ALOUD: &str = "scheme.readAloud";
pub const STOP_READING: &str = "scheme.stopReading";

pub const DOCS_TITLE: &str = "docs.title";
pub const COMMON_DOCS: &str = "docs.commonDocs";
pub const DOC_LIST: &str = "docs.docList";
pub const GLOSSARY_TITLE: &str = "docs.glossaryTitle";
pub const AUTOFILL: &str = "docs.autofill";
pub const AUTOFILL_SUCCESS: &str = "docs.autofillSuccess";

pub const CHAT_TITLE: &str = "chat.title";
pub const CHAT_GREETING: &str = "chat.greeting";
pub const TYPE_MESSAGE: &str = "chat.typeMessage";
pub const SEND: &str = "chat.send";
pub const TYPING: &str = "chat.typing";
pub const CHAT_UNAVAILABLE: &str = "chat.unavailable";
pub const HUMAN_HELP: &str = "chat.humanHelp";
pub const HUMAN_HELP_NOTICE: &str = "chat.humanHelpNotice";

pub const COMMUNITY_TITLE: &str = "community.title";
pub const STORY1_TITLE: &str = "community.story1Title";
pub const STORY1_CONTENT: &str = "community.story1Content";
pub const STORY2_TITLE: &str = "community.story2Title";
pub const STORY2_CONTENT: &str = "community.story2Content";

pub const FOOTER: &str = "footer";

/// Every key a panel reads. Checked against each bundled locale.
#[cfg(test)]
pub const ALL: &[&str] = &[
    APP_NAME,
    TAGLINE,
    HIGH_CONTRAST,
    LARGE_TEXT,
    LANGUAGE,
    ENGLISH,
    HINDI,
    NAV_FINDER,
    NAV_DOCS,
    NAV_CHAT,
    NAV_COMMUNITY,
    ALERTS_TITLE,
    ALERTS_CONTENT,
    FINDER_TITLE,
    DISABILITY_TYPE,
    SELECT_DISABILITY,
    AGE,
    ENTER_AGE,
    LOCATION,
    ENTER_LOCATION,
    USE_VOICE_INPUT,
    VOICE_INPUT_ACTIVE,
    VOICE_INPUT_FAILED,
    FIND_SCHEMES,
    FINDING_SCHEMES,
    NO_SCHEMES_FOUND,
    ERROR_FINDING_SCHEMES,
    ELIGIBILITY,
    BENEFITS,
    DOCUMENTS_REQUIRED,
    APPLICATION_PROCESS,
    READ_ALOUD,
    STOP_READING,
    DOCS_TITLE,
    COMMON_DOCS,
    DOC_LIST,
    GLOSSARY_TITLE,
    AUTOFILL,
    AUTOFILL_SUCCESS,
    CHAT_TITLE,
    CHAT_GREETING,
    TYPE_MESSAGE,
    SEND,
    TYPING,
    CHAT_UNAVAILABLE,
    HUMAN_HELP,
    HUMAN_HELP_NOTICE,
    COMMUNITY_TITLE,
    STORY1_TITLE,
    STORY1_CONTENT,
    STORY2_TITLE,
    STORY2_CONTENT,
    FOOTER,
];
