use super::StorageGateway;
use crate::domain::event::Event;
use crate::error::Result;
use uuid::Uuid;

/// Inserts the event catalog on first boot. A non-empty events store is left
/// untouched, so reseeding across restarts never duplicates entries.
pub async fn seed_event_catalog(gateway: &dyn StorageGateway) -> Result<()> {
    if gateway.count_events().await? > 0 {
        return Ok(());
    }

    let catalog = event_catalog();
    let count = catalog.len();
    for event in catalog {
        gateway.insert_event(&event).await?;
    }
    tracing::info!(events = count, "Seeded event catalog");

    Ok(())
}

fn entry(title: &str, date: &str, location: &str, image: &str, description: &str, has_registration: bool) -> Event {
    Event {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        date: date.to_string(),
        location: location.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        has_registration,
    }
}

fn event_catalog() -> Vec<Event> {
    vec![
        entry(
            "Annual Alumni Reunion 2026",
            "2026-03-15",
            "Main Campus Auditorium, San Francisco",
            "https://images.unsplash.com/photo-1590650046871-92c887180603",
            "Join us for the grand annual reunion celebrating 50 years of Global Horizon University excellence. Reconnect with old friends, network with fellow alumni, and celebrate our shared journey. The event includes keynote speeches from distinguished alumni, campus tours, and a special gala dinner.",
            true,
        ),
        entry(
            "Tech Innovation Summit",
            "2026-04-20",
            "Innovation Hub, Building 7",
            "https://images.unsplash.com/photo-1522071820081-009f0129c71c",
            "Explore cutting-edge technologies and innovations in AI, blockchain, and quantum computing. This summit brings together alumni entrepreneurs, researchers, and industry leaders to discuss the future of technology. Features panel discussions, startup showcases, and networking opportunities with venture capitalists.",
            true,
        ),
        entry(
            "Career Mentorship Workshop",
            "2026-05-10",
            "Student Center, Room 301",
            "https://images.unsplash.com/photo-1522202176988-66273c2fd55f",
            "Senior alumni share career insights and mentor recent graduates in this interactive workshop. Learn about career transitions, leadership development, and work-life balance from those who have walked the path. Includes one-on-one mentoring sessions and resume review opportunities.",
            false,
        ),
        entry(
            "Global Horizon Golf Classic",
            "2026-06-05",
            "Pebble Beach Golf Links",
            "https://images.pexels.com/photos/159490/yale-university-landscape-universities-schools-159490.jpeg",
            "Annual charity golf tournament supporting the Global Horizon Scholarship Fund. Enjoy a day of golf, networking, and giving back to the community. All proceeds benefit deserving students from underprivileged backgrounds. Includes breakfast, lunch, and awards ceremony.",
            true,
        ),
        entry(
            "Healthcare Innovation Forum",
            "2026-07-12",
            "Medical Sciences Building",
            "https://images.unsplash.com/photo-1614934273187-c83f8780fad9",
            "Alumni from healthcare and biotech industries discuss emerging trends in personalized medicine, telemedicine, and healthcare AI. Features presentations from leading medical researchers and healthcare entrepreneurs. Great opportunity for collaboration and knowledge sharing.",
            false,
        ),
        entry(
            "Entrepreneurship Bootcamp",
            "2026-08-18",
            "Startup Incubator, Campus West",
            "https://images.unsplash.com/photo-1758520144420-3e5b22e9b9a4",
            "Three-day intensive bootcamp for aspiring entrepreneurs. Learn from successful alumni founders about fundraising, product development, team building, and scaling startups. Includes pitch practice sessions, investor meetings, and networking dinners with angel investors.",
            true,
        ),
        entry(
            "Homecoming Weekend Celebration",
            "2026-09-25",
            "Throughout Campus",
            "https://images.unsplash.com/photo-1541339907198-e08756dedf3f",
            "Welcome home for the ultimate alumni experience! Three days of festivities including football game, concerts, food festivals, and class reunions. Special celebrations for milestone reunion classes. Bring your family and show them where your journey began.",
            false,
        ),
        entry(
            "Women in Leadership Conference",
            "2026-10-08",
            "Conference Center, Building 12",
            "https://images.unsplash.com/photo-1758599543132-ba9b306d715e",
            "Empowering women alumni through leadership development, networking, and mentorship. Features keynote speeches from distinguished women leaders, breakout sessions on negotiation and executive presence, and networking luncheon. Open to all who support women in leadership.",
            false,
        ),
        entry(
            "Global Alumni Connect - Virtual",
            "2026-11-15",
            "Online Virtual Event",
            "https://images.unsplash.com/photo-1590579491624-f98f36d4c763",
            "Connect with alumni worldwide in this virtual networking event. Features breakout rooms by industry, location, and interests. Includes virtual campus tour, president address, and online games. Perfect for international alumni who cannot travel to campus.",
            false,
        ),
        entry(
            "Holiday Gala and Fundraiser",
            "2026-12-12",
            "Grand Ballroom, Hilton San Francisco",
            "https://images.pexels.com/photos/34504392/pexels-photo-34504392.jpeg",
            "Celebrate the season at our elegant holiday gala supporting student scholarships and campus improvements. Enjoy fine dining, live music, dancing, and silent auction. Black-tie optional. Recognition ceremony for major donors and distinguished alumni. Make this holiday season memorable while giving back.",
            false,
        ),
    ]
}
