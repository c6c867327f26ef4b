//! Interface text in English and Dutch.
//!
//! Lookups fall back to English, then to the key itself, so a missing
//! translation degrades to readable (if untranslated) text instead of a gap.

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    pub const ALL: &[Language] = &[Language::En, Language::Nl];

    /// Lower-case code used in the preference file.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::En),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    /// The other language (EN ↔ NL).
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Nl,
            Language::Nl => Language::En,
        }
    }

    /// Upper-case label shown on the language toggle.
    pub fn badge(self) -> String {
        self.code().to_uppercase()
    }

    fn dictionary(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::En => EN,
            Language::Nl => NL,
        }
    }
}

/// Translate `key` into `lang`.
pub fn translate(lang: Language, key: &str) -> &str {
    lookup(lang.dictionary(), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

fn lookup(dict: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    dict.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// ───────────────────────────────────────── dictionaries ──────

static EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.projects", "Projects"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("hero.greeting", "Hello! I'm"),
    ("hero.ctaPrimary", "My Projects"),
    ("hero.ctaSecondary", "Get In Touch"),
    ("projects.title", "Projects"),
    ("projects.viewAll", "View All"),
    ("projects.showLess", "Show Less"),
    ("projects.empty", "No projects yet."),
    ("projects.page", "Page"),
    ("projects.more", "more below"),
    ("about.title", "About Me"),
    ("about.badge", "Available for work"),
    ("contact.title", "Contact"),
    ("contact.form.name", "Your Name"),
    ("contact.form.email", "Email"),
    ("contact.form.message", "Tell me about your project..."),
    ("contact.form.projectType", "Project Type"),
    ("contact.form.budget", "Budget Range"),
    ("contact.form.company", "Company (Optional)"),
    ("contact.form.phone", "Phone (Optional)"),
    ("contact.form.newsletter", "Subscribe to my newsletter for web development tips"),
    ("contact.form.send", "Send Message"),
    ("contact.form.sending", "Sending…"),
    ("contact.form.editHint", "Enter: edit form"),
    ("contact.form.editingHint", "Tab: next field | Ctrl+s: send | Esc: done"),
    ("footer.copyright", "All rights reserved."),
    ("notification.success", "Thank you for your message! I will get back to you soon."),
    ("notification.error.fields", "Please fill in all fields"),
    ("notification.error.email", "Please enter a valid email address"),
    ("notification.error.network", "Network error. Please check your connection and try again."),
    ("notification.error.link", "Could not open the project link."),
    ("notification.error.form", "Form endpoint not configured. Please provide your Formspree ID."),
    ("notification.error.submit", "Submission failed. Please try again later."),
];

static NL: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "Over"),
    ("nav.projects", "Projecten"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("hero.greeting", "Hallo! Ik ben"),
    ("hero.ctaPrimary", "Mijn Projecten"),
    ("hero.ctaSecondary", "Contact opnemen"),
    ("projects.title", "Projecten"),
    ("projects.viewAll", "Alles bekijken"),
    ("projects.showLess", "Minder tonen"),
    ("projects.empty", "Nog geen projecten."),
    ("projects.page", "Pagina"),
    ("projects.more", "meer hieronder"),
    ("about.title", "Over Mij"),
    ("about.badge", "Beschikbaar voor werk"),
    ("contact.title", "Contact"),
    ("contact.form.name", "Uw naam"),
    ("contact.form.email", "E-mail"),
    ("contact.form.message", "Vertel me over uw project..."),
    ("contact.form.projectType", "Project Type"),
    ("contact.form.budget", "Budget Range"),
    ("contact.form.company", "Bedrijf (Optioneel)"),
    ("contact.form.phone", "Telefoon (Optioneel)"),
    ("contact.form.newsletter", "Abonneer op mijn nieuwsbrief voor web development tips"),
    ("contact.form.send", "Bericht Versturen"),
    ("contact.form.sending", "Versturen…"),
    ("contact.form.editHint", "Enter: formulier invullen"),
    ("contact.form.editingHint", "Tab: volgend veld | Ctrl+s: versturen | Esc: klaar"),
    ("footer.copyright", "Alle rechten voorbehouden."),
    ("notification.success", "Bedankt voor je bericht! Ik neem binnenkort contact met je op."),
    ("notification.error.fields", "Vul alle velden in"),
    ("notification.error.email", "Voer een geldig e-mailadres in"),
    ("notification.error.network", "Netwerkfout. Controleer je verbinding en probeer opnieuw."),
    ("notification.error.link", "Kon de projectlink niet openen."),
    ("notification.error.form", "Formulier endpoint niet geconfigureerd. Geef je Formspree ID op."),
    ("notification.error.submit", "Verzending mislukt. Probeer later opnieuw."),
];
