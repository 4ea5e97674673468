//! Translation tables for the survey screens
//!
//! One static table per language. Tables are complete: every label the
//! wizard renders exists in every language, so lookups never fail.

use feedback_core::{Department, Gender, Language, RatingDimension, ValidationIssue};

/// Every user-facing string for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub select_language: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub fields: FieldLabels,
    pub ratings: RatingLabels,
    /// Labels for rating values 1 through 5
    pub rating_scale: [&'static str; 5],
    pub comments: CommentLabels,
    pub errors: ErrorMessages,
    pub success: SuccessMessages,
}

#[derive(Debug)]
pub struct FieldLabels {
    pub name: &'static str,
    pub age: &'static str,
    pub gender: &'static str,
    pub phone: &'static str,
    pub department: &'static str,
    pub gender_select: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub other: &'static str,
}

#[derive(Debug)]
pub struct RatingLabels {
    pub overall_satisfaction: &'static str,
    pub staff_interaction: &'static str,
    pub wait_times: &'static str,
    pub facility_cleanliness: &'static str,
    pub treatment_quality: &'static str,
    pub communication: &'static str,
}

#[derive(Debug)]
pub struct CommentLabels {
    pub heading: &'static str,
    pub hint: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug)]
pub struct ErrorMessages {
    pub fill_required: &'static str,
    pub name_required: &'static str,
    pub invalid_phone: &'static str,
    pub dept_required: &'static str,
    pub age_out_of_range: &'static str,
    pub rating_required: &'static str,
    pub submit_failed: &'static str,
}

#[derive(Debug)]
pub struct SuccessMessages {
    pub title: &'static str,
    pub message: &'static str,
    pub toast: &'static str,
    pub another: &'static str,
}

impl Strings {
    pub fn rating_label(&self, dimension: RatingDimension) -> &'static str {
        let r = &self.ratings;
        match dimension {
            RatingDimension::OverallSatisfaction => r.overall_satisfaction,
            RatingDimension::StaffInteraction => r.staff_interaction,
            RatingDimension::WaitTimes => r.wait_times,
            RatingDimension::FacilityCleanliness => r.facility_cleanliness,
            RatingDimension::TreatmentQuality => r.treatment_quality,
            RatingDimension::Communication => r.communication,
        }
    }

    /// Label for a rating value; `None` for an unrated (0) or out-of-scale value.
    pub fn scale_label(&self, value: u8) -> Option<&'static str> {
        match value {
            1..=5 => Some(self.rating_scale[usize::from(value) - 1]),
            _ => None,
        }
    }

    pub fn gender_label(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => self.fields.male,
            Gender::Female => self.fields.female,
            Gender::Other => self.fields.other,
        }
    }

    /// Department names are shown in English in every language.
    pub fn department_label(&self, department: Department) -> &'static str {
        department.display_name()
    }

    pub fn issue_message(&self, issue: ValidationIssue) -> &'static str {
        match issue {
            ValidationIssue::NameRequired => self.errors.name_required,
            ValidationIssue::InvalidPhone => self.errors.invalid_phone,
            ValidationIssue::DepartmentRequired => self.errors.dept_required,
            ValidationIssue::AgeOutOfRange => self.errors.age_out_of_range,
        }
    }
}

pub fn strings_for(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::As => &AS,
    }
}

static EN: Strings = Strings {
    title: "Patient Feedback",
    subtitle: "Help us improve our care",
    select_language: "Select your language",
    next: "Next",
    back: "Back",
    submit: "Submit Feedback",
    submitting: "Submitting...",
    fields: FieldLabels {
        name: "Full Name",
        age: "Age",
        gender: "Gender",
        phone: "Phone Number",
        department: "Department Visited",
        gender_select: "Select",
        male: "Male",
        female: "Female",
        other: "Other",
    },
    ratings: RatingLabels {
        overall_satisfaction: "Overall Satisfaction",
        staff_interaction: "Staff Interaction",
        wait_times: "Wait Times",
        facility_cleanliness: "Facility Cleanliness",
        treatment_quality: "Treatment Quality",
        communication: "Communication",
    },
    rating_scale: ["Poor", "Fair", "Good", "Very Good", "Excellent"],
    comments: CommentLabels {
        heading: "Almost done!",
        hint: "Share any additional thoughts (optional)",
        label: "Additional Comments",
        placeholder: "Tell us about your experience...",
    },
    errors: ErrorMessages {
        fill_required: "Please fill in all required fields",
        name_required: "Name is required",
        invalid_phone: "Enter a valid 10-digit phone number",
        dept_required: "Please select a department",
        age_out_of_range: "Age must be between 1 and 120",
        rating_required: "Please provide at least one rating.",
        submit_failed: "Something went wrong. Please try again.",
    },
    success: SuccessMessages {
        title: "Thank You!",
        message: "Your feedback has been submitted successfully.",
        toast: "Feedback submitted successfully!",
        another: "Submit another response",
    },
};

static HI: Strings = Strings {
    title: "रोगी प्रतिक्रिया",
    subtitle: "हमारी सेवा को बेहतर बनाने में मदद करें",
    select_language: "अपनी भाषा चुनें",
    next: "आगे",
    back: "पीछे",
    submit: "प्रतिक्रिया भेजें",
    submitting: "भेजा जा रहा है...",
    fields: FieldLabels {
        name: "पूरा नाम",
        age: "आयु",
        gender: "लिंग",
        phone: "फ़ोन नंबर",
        department: "विभाग",
        gender_select: "चुनें",
        male: "पुरुष",
        female: "महिला",
        other: "अन्य",
    },
    ratings: RatingLabels {
        overall_satisfaction: "समग्र संतुष्टि",
        staff_interaction: "कर्मचारियों का व्यवहार",
        wait_times: "प्रतीक्षा समय",
        facility_cleanliness: "सुविधा की स्वच्छता",
        treatment_quality: "उपचार की गुणवत्ता",
        communication: "संवाद",
    },
    rating_scale: ["खराब", "ठीक", "अच्छा", "बहुत अच्छा", "उत्कृष्ट"],
    comments: CommentLabels {
        heading: "लगभग पूरा हो गया!",
        hint: "कोई अतिरिक्त विचार साझा करें (वैकल्पिक)",
        label: "अतिरिक्त टिप्पणियाँ",
        placeholder: "अपने अनुभव के बारे में बताएं...",
    },
    errors: ErrorMessages {
        fill_required: "कृपया सभी आवश्यक फ़ील्ड भरें",
        name_required: "नाम आवश्यक है",
        invalid_phone: "मान्य 10 अंकों का फ़ोन नंबर दर्ज करें",
        dept_required: "कृपया विभाग चुनें",
        age_out_of_range: "आयु 1 से 120 के बीच होनी चाहिए",
        rating_required: "कृपया कम से कम एक रेटिंग दें।",
        submit_failed: "कुछ गलत हो गया। कृपया पुनः प्रयास करें।",
    },
    success: SuccessMessages {
        title: "धन्यवाद!",
        message: "आपकी प्रतिक्रिया सफलतापूर्वक भेज दी गई है।",
        toast: "प्रतिक्रिया सफलतापूर्वक भेजी गई!",
        another: "एक और प्रतिक्रिया दें",
    },
};

static AS: Strings = Strings {
    title: "ৰোগীৰ মতামত",
    subtitle: "আমাৰ সেৱা উন্নত কৰাত সহায় কৰক",
    select_language: "আপোনাৰ ভাষা বাছনি কৰক",
    next: "পৰৱৰ্তী",
    back: "পিছলৈ",
    submit: "মতামত দাখিল কৰক",
    submitting: "দাখিল কৰা হৈছে...",
    fields: FieldLabels {
        name: "সম্পূৰ্ণ নাম",
        age: "বয়স",
        gender: "লিংগ",
        phone: "ফোন নম্বৰ",
        department: "বিভাগ",
        gender_select: "বাছনি কৰক",
        male: "পুৰুষ",
        female: "মহিলা",
        other: "অন্যান্য",
    },
    ratings: RatingLabels {
        overall_satisfaction: "সামগ্ৰিক সন্তুষ্টি",
        staff_interaction: "কৰ্মচাৰীৰ ব্যৱহাৰ",
        wait_times: "অপেক্ষাৰ সময়",
        facility_cleanliness: "পৰিষ্কাৰ-পৰিচ্ছন্নতা",
        treatment_quality: "চিকিৎসাৰ মান",
        communication: "যোগাযোগ",
    },
    rating_scale: ["বেয়া", "চলিব", "ভাল", "বহুত ভাল", "উৎকৃষ্ট"],
    comments: CommentLabels {
        heading: "প্ৰায় সম্পূৰ্ণ!",
        hint: "অতিৰিক্ত মতামত থাকিলে জনাওক (ঐচ্ছিক)",
        label: "অতিৰিক্ত মন্তব্য",
        placeholder: "আপোনাৰ অভিজ্ঞতাৰ বিষয়ে কওক...",
    },
    errors: ErrorMessages {
        fill_required: "অনুগ্ৰহ কৰি সকলো প্ৰয়োজনীয় তথ্য পূৰণ কৰক",
        name_required: "নাম প্ৰয়োজনীয়",
        invalid_phone: "এটা বৈধ ১০ অংকৰ ফোন নম্বৰ দিয়ক",
        dept_required: "অনুগ্ৰহ কৰি এটা বিভাগ বাছনি কৰক",
        age_out_of_range: "বয়স ১ৰ পৰা ১২০ৰ ভিতৰত হ'ব লাগিব",
        rating_required: "অনুগ্ৰহ কৰি অন্ততঃ এটা মূল্যাংকন দিয়ক।",
        submit_failed: "কিবা ভুল হ'ল। অনুগ্ৰহ কৰি পুনৰ চেষ্টা কৰক।",
    },
    success: SuccessMessages {
        title: "ধন্যবাদ!",
        message: "আপোনাৰ মতামত সফলতাৰে দাখিল কৰা হ'ল।",
        toast: "মতামত সফলতাৰে দাখিল কৰা হ'ল!",
        another: "আন এটা মতামত দিয়ক",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_table() {
        for language in Language::ALL {
            let strings = strings_for(language);
            assert!(!strings.title.is_empty());
            assert!(!strings.errors.rating_required.is_empty());
            for dimension in RatingDimension::ALL {
                assert!(!strings.rating_label(dimension).is_empty());
            }
        }
    }

    #[test]
    fn test_tables_differ() {
        assert_ne!(strings_for(Language::En).title, strings_for(Language::Hi).title);
        assert_ne!(strings_for(Language::Hi).title, strings_for(Language::As).title);
    }

    #[test]
    fn test_scale_label_bounds() {
        let en = strings_for(Language::En);
        assert_eq!(en.scale_label(0), None);
        assert_eq!(en.scale_label(1), Some("Poor"));
        assert_eq!(en.scale_label(5), Some("Excellent"));
        assert_eq!(en.scale_label(6), None);
    }

    #[test]
    fn test_issue_messages_are_localized() {
        assert_eq!(
            strings_for(Language::En).issue_message(ValidationIssue::InvalidPhone),
            "Enter a valid 10-digit phone number"
        );
        assert_eq!(
            strings_for(Language::Hi).issue_message(ValidationIssue::NameRequired),
            "नाम आवश्यक है"
        );
    }
}
