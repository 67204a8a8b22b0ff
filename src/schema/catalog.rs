//! The literal field tables for each matching entity.

use super::{EntitySchema, FieldSpec};

/// `Books` sheet.
#[rustfmt::skip]
pub const BOOKS: EntitySchema = EntitySchema {
    title: "Books",
    core: &[
        FieldSpec::exists("title", "VARCHAR(500)", "Book title", "Required field"),
        FieldSpec::exists("author", "VARCHAR(255)", "Author name(s)", "Required field"),
        FieldSpec::exists("description", "TEXT", "Book description/summary", "Long-form description"),
        FieldSpec::exists("cover_image_url", "VARCHAR(500)", "URL to book cover image", "For visual display"),
        FieldSpec::exists("amazon_url", "VARCHAR(500)", "Amazon purchase link", "For purchasing"),
        FieldSpec::exists("publication_year", "INTEGER", "Year published", "For relevance"),
        FieldSpec::exists("reading_time", "VARCHAR(100)", "Estimated time to read", "e.g., '4-5 hours'"),
        FieldSpec::exists("difficulty_level", "VARCHAR(50)", "Reading difficulty", "Beginner/Intermediate/Advanced"),
        FieldSpec::exists("is_active", "BOOLEAN", "Active status", "Show/hide from matching"),
        FieldSpec::exists("created_at", "TIMESTAMP", "Record creation date", "Audit trail"),
        FieldSpec::exists("updated_at", "TIMESTAMP", "Last update date", "Audit trail"),
    ],
    matching: &[
        FieldSpec::exists("focus_areas_covered", "TEXT (JSON)", "Business focus areas covered", "JSON array for matching"),
        FieldSpec::exists("topics", "TEXT (JSON)", "Topics covered in book", "JSON array of topics"),
        FieldSpec::exists("target_audience", "TEXT", "Ideal reader description", "Text description"),
        FieldSpec::exists("key_takeaways", "TEXT (JSON)", "Main lessons/takeaways", "JSON array of takeaways"),
    ],
    missing: &[
        FieldSpec::missing("price_range", "VARCHAR(50)", "Price bracket", "$10-20, $20-30, etc."),
        FieldSpec::missing("book_format", "TEXT (JSON)", "Available formats", "Hardcover, Paperback, eBook, Audiobook"),
        FieldSpec::missing("page_count", "INTEGER", "Number of pages", "For time estimation"),
        FieldSpec::missing("isbn", "VARCHAR(20)", "ISBN number", "Unique identifier"),
        FieldSpec::missing("publisher", "VARCHAR(255)", "Publishing company", "For credibility"),
        FieldSpec::missing("endorsements", "TEXT (JSON)", "Notable endorsements", "Industry leaders who recommend"),
        FieldSpec::missing("companion_resources", "TEXT (JSON)", "Additional resources", "Workbooks, courses, etc."),
        FieldSpec::missing("revenue_tier_relevance", "TEXT (JSON)", "Best for which contractor sizes", "Match to contractor revenue"),
        FieldSpec::missing("powerconfidence_score", "INTEGER", "Book quality rating", "0-100 score based on reviews"),
        FieldSpec::missing("total_reviews", "INTEGER", "Number of reviews", "From Amazon, Goodreads, etc."),
        FieldSpec::missing("average_rating", "DECIMAL(2,1)", "Average star rating", "1.0-5.0 scale"),
    ],
};

/// `Podcasts` sheet.
#[rustfmt::skip]
pub const PODCASTS: EntitySchema = EntitySchema {
    title: "Podcasts",
    core: &[
        FieldSpec::exists("title", "VARCHAR(255)", "Podcast title", "Required field"),
        FieldSpec::exists("host", "VARCHAR(255)", "Host name(s)", "Required field"),
        FieldSpec::exists("description", "TEXT", "Podcast description", "Long-form description"),
        FieldSpec::exists("frequency", "VARCHAR(100)", "Release frequency", "Weekly, Bi-weekly, Monthly"),
        FieldSpec::exists("website", "VARCHAR(500)", "Podcast website", "Official website"),
        FieldSpec::exists("logo_url", "VARCHAR(500)", "Podcast logo/artwork", "For visual display"),
        FieldSpec::exists("is_active", "BOOLEAN", "Active status", "Show/hide from matching"),
    ],
    matching: &[
        FieldSpec::exists("focus_areas_covered", "TEXT (JSON)", "Business focus areas covered", "JSON array for matching"),
        FieldSpec::exists("topics", "TEXT (JSON)", "Topics discussed", "JSON array of topics"),
    ],
    missing: &[
        FieldSpec::missing("target_audience", "TEXT", "Ideal listener description", "Critical for matching"),
        FieldSpec::missing("episode_count", "INTEGER", "Total episodes published", "Shows longevity"),
        FieldSpec::missing("average_episode_length", "VARCHAR(50)", "Typical episode duration", "15-30 min, 30-60 min, etc."),
        FieldSpec::missing("spotify_url", "VARCHAR(500)", "Spotify podcast link", "For listening"),
        FieldSpec::missing("apple_podcasts_url", "VARCHAR(500)", "Apple Podcasts link", "For listening"),
        FieldSpec::missing("youtube_url", "VARCHAR(500)", "YouTube channel link", "If video podcast"),
        FieldSpec::missing("guest_profile", "TEXT", "Types of guests featured", "Industry leaders, contractors, etc."),
        FieldSpec::missing("format_type", "VARCHAR(100)", "Podcast format", "Interview, Solo, Panel, Q&A"),
        FieldSpec::missing("revenue_tier_relevance", "TEXT (JSON)", "Best for which contractor sizes", "Match to contractor revenue"),
        FieldSpec::missing("subscription_required", "BOOLEAN", "Requires paid subscription", "Free vs Premium"),
        FieldSpec::missing("launch_year", "INTEGER", "Year podcast started", "For credibility"),
        FieldSpec::missing("download_count", "INTEGER", "Total downloads/listens", "Popularity metric"),
        FieldSpec::missing("average_rating", "DECIMAL(2,1)", "Average listener rating", "1.0-5.0 scale"),
        FieldSpec::missing("notable_episodes", "TEXT (JSON)", "Must-listen episodes", "Top recommended episodes"),
    ],
};

/// `Events` sheet.
#[rustfmt::skip]
pub const EVENTS: EntitySchema = EntitySchema {
    title: "Events",
    core: &[
        FieldSpec::exists("name", "VARCHAR(255)", "Event name", "Required field"),
        FieldSpec::exists("date", "DATE", "Event date(s)", "When event occurs"),
        FieldSpec::exists("location", "VARCHAR(255)", "Event location", "City, State or Virtual"),
        FieldSpec::exists("format", "VARCHAR(100)", "Event format", "In-Person, Virtual, Hybrid"),
        FieldSpec::exists("description", "TEXT", "Event description", "Long-form description"),
        FieldSpec::exists("website", "VARCHAR(500)", "Event website", "Registration/info site"),
        FieldSpec::exists("logo_url", "VARCHAR(500)", "Event logo/banner", "For visual display"),
        FieldSpec::exists("registration_deadline", "DATE", "Last day to register", "Cutoff date"),
        FieldSpec::exists("expected_attendees", "VARCHAR(255)", "Expected attendance", "Size of event"),
        FieldSpec::exists("is_active", "BOOLEAN", "Active status", "Show/hide from matching"),
    ],
    matching: &[
        FieldSpec::exists("focus_areas_covered", "TEXT (JSON)", "Business focus areas covered", "JSON array for matching"),
    ],
    missing: &[
        FieldSpec::missing("target_audience", "TEXT", "Ideal attendee description", "Critical for matching"),
        FieldSpec::missing("topics", "TEXT (JSON)", "Topics covered at event", "Sessions, workshops, keynotes"),
        FieldSpec::missing("price_range", "VARCHAR(100)", "Registration cost", "$500-1000, $1000-2000, etc."),
        FieldSpec::missing("early_bird_deadline", "DATE", "Early registration deadline", "For discount pricing"),
        FieldSpec::missing("early_bird_discount", "VARCHAR(100)", "Early bird pricing/savings", "20% off, Save $200, etc."),
        FieldSpec::missing("sponsor_companies", "TEXT (JSON)", "Event sponsors", "Major sponsors/partners"),
        FieldSpec::missing("speaker_highlights", "TEXT (JSON)", "Notable speakers", "Keynote speakers, industry leaders"),
        FieldSpec::missing("ceu_credits_available", "BOOLEAN", "Continuing education credits", "Professional development"),
        FieldSpec::missing("ceu_credit_hours", "DECIMAL(3,1)", "Number of CEU hours", "If applicable"),
        FieldSpec::missing("meals_included", "VARCHAR(255)", "Meal provisions", "Breakfast, Lunch, Dinner, etc."),
        FieldSpec::missing("accommodation_info", "TEXT", "Hotel/lodging information", "Partner hotels, discounts"),
        FieldSpec::missing("revenue_tier_relevance", "TEXT (JSON)", "Best for which contractor sizes", "Match to contractor revenue"),
        FieldSpec::missing("past_attendance_count", "INTEGER", "Previous year attendance", "Historical data"),
        FieldSpec::missing("vendor_booth_available", "BOOLEAN", "Exhibitor opportunities", "Can contractors exhibit"),
        FieldSpec::missing("networking_events", "TEXT (JSON)", "Networking opportunities", "Mixers, dinners, golf, etc."),
        FieldSpec::missing("recording_available", "BOOLEAN", "Sessions recorded", "Post-event access"),
        FieldSpec::missing("refund_policy", "TEXT", "Cancellation/refund policy", "Important for planning"),
    ],
};

/// `Strategic Partners` sheet.
#[rustfmt::skip]
pub const STRATEGIC_PARTNERS: EntitySchema = EntitySchema {
    title: "Strategic Partners",
    core: &[
        FieldSpec::exists("company_name", "VARCHAR(255)", "Company name", "Required field"),
        FieldSpec::exists("description", "TEXT", "Company description", "Long-form description"),
        FieldSpec::exists("logo_url", "VARCHAR(500)", "Company logo", "For visual display"),
        FieldSpec::exists("website", "VARCHAR(500)", "Company website", "Official website"),
        FieldSpec::exists("contact_email", "VARCHAR(255)", "Primary contact email", "Main contact"),
        FieldSpec::exists("contact_phone", "VARCHAR(50)", "Primary contact phone", "Main contact"),
        FieldSpec::exists("power100_subdomain", "VARCHAR(255)", "Power100 subdomain", "partner.power100.io"),
        FieldSpec::exists("value_proposition", "TEXT", "Value prop/tagline", "Elevator pitch"),
        FieldSpec::exists("power_confidence_score", "INTEGER", "PowerConfidence rating", "0-100 score"),
        FieldSpec::exists("is_active", "BOOLEAN", "Active status", "Show/hide from matching"),
        FieldSpec::exists("created_at", "TIMESTAMP", "Record creation date", "Audit trail"),
        FieldSpec::exists("updated_at", "TIMESTAMP", "Last update date", "Audit trail"),
    ],
    matching: &[
        FieldSpec::exists("focus_areas_served", "TEXT (JSON)", "Focus areas they serve", "JSON array for matching"),
        FieldSpec::exists("service_areas", "TEXT (JSON)", "Services offered", "JSON array of services"),
        FieldSpec::exists("target_revenue_range", "TEXT (JSON)", "Client revenue targets", "JSON array of ranges"),
        FieldSpec::exists("geographic_regions", "TEXT (JSON)", "Regions served", "JSON array of regions"),
        FieldSpec::exists("service_category", "VARCHAR(255)", "Primary service category", "Main category"),
        FieldSpec::exists("focus_areas_12_months", "TEXT (JSON)", "12-month focus areas", "Current priorities"),
    ],
    missing: &[
        FieldSpec::missing("minimum_engagement_cost", "VARCHAR(100)", "Minimum project cost", "Entry price point"),
        FieldSpec::missing("typical_engagement_duration", "VARCHAR(100)", "Typical project length", "3-6 months, 6-12 months, etc."),
        FieldSpec::missing("client_success_rate", "DECIMAL(3,1)", "Success percentage", "Based on outcomes"),
        FieldSpec::missing("total_contractors_served", "INTEGER", "Number of clients served", "Experience metric"),
        FieldSpec::missing("years_in_business", "INTEGER", "Company age", "Credibility factor"),
        FieldSpec::missing("team_size", "INTEGER", "Number of employees", "Company scale"),
        FieldSpec::missing("certifications", "TEXT (JSON)", "Industry certifications", "Credentials"),
        FieldSpec::missing("case_study_count", "INTEGER", "Published case studies", "Proof points"),
        FieldSpec::missing("response_time_hours", "INTEGER", "Typical response time", "Service level"),
    ],
};

/// Every entity, in sheet order.
pub const ENTITIES: [EntitySchema; 4] = [BOOKS, PODCASTS, EVENTS, STRATEGIC_PARTNERS];

/// Notes on how the matching algorithm reads the schema.
pub const MATCHING_ALGORITHM_NOTES: [&str; 4] = [
    "1. All entities use 'focus_areas_covered' for primary matching",
    "2. 'topics' field provides secondary matching capability",
    "3. 'target_audience' critical for relevance scoring",
    "4. 'revenue_tier_relevance' ensures size-appropriate matches",
];

/// Fields to add first.
pub const PRIORITY_ADDITIONS: [&str; 4] = [
    "• Podcasts: Add 'target_audience' field (CRITICAL)",
    "• Events: Add 'target_audience' and 'topics' fields (CRITICAL)",
    "• All: Add 'revenue_tier_relevance' for better contractor matching",
    "• All: Add quality/rating metrics for ranking results",
];
