//! Display copy for the landing page. Everything here is fixed at compile time.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub photo: &'static str,
    pub rating: u8,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Filled/empty flags for the five rating stars.
    pub fn stars(&self) -> [bool; Self::MAX_RATING as usize] {
        let mut stars = [false; Self::MAX_RATING as usize];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = i < self.rating as usize;
        }
        stars
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Fitness Enthusiast",
        quote: "This gym transformed my life. The trainers are knowledgeable and the community is incredibly supportive. I've never felt better!",
        photo: "/photos/sarah.jpg",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "Marathon Runner",
        quote: "The personalized training program helped me shave 15 minutes off my personal best. Highly recommended for serious athletes!",
        photo: "/photos/michael.jpg",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Emma Rodriguez",
        role: "Yoga Instructor",
        quote: "Clean facilities, top-notch equipment, and friendly staff. My go-to place for cross-training and strength building.",
        photo: "/photos/emma.jpg",
        rating: 4,
    },
    Testimonial {
        id: 4,
        name: "David Wilson",
        role: "Personal Trainer",
        quote: "Even as a trainer myself, I learn new techniques every time I visit. World-class facility with amazing energy!",
        photo: "/photos/david.jpg",
        rating: 5,
    },
    Testimonial {
        id: 5,
        name: "Lisa Park",
        role: "Nutritionist",
        quote: "The perfect combination of great equipment and expert guidance. Love the nutrition workshops and meal planning support!",
        photo: "/photos/lisa.jpg",
        rating: 5,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub icon: &'static str,
    /// CSS modifier class picking the card's gradient pair.
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Monthly Plan",
        description: "Full access to all gym facilities with personalized workout plans updated monthly.",
        price: "$99/month",
        icon: "🏋️",
        accent: "accent-primary",
    },
    Service {
        id: 2,
        title: "Personal Trainer",
        description: "One-on-one sessions with certified trainers to maximize your results.",
        price: "$299/month",
        icon: "📋",
        accent: "accent-blue",
    },
    Service {
        id: 3,
        title: "Nutrition Guide",
        description: "Custom meal plans and nutritional counseling tailored to your goals.",
        price: "$149/month",
        icon: "🍽️",
        accent: "accent-hover",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#top" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "Reviews", href: "#reviews" },
    NavLink { name: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const NAV_SOCIALS: &[SocialLink] = &[
    SocialLink { label: "WhatsApp", icon: "💬", href: "https://wa.me/yournumber" },
    SocialLink { label: "Facebook", icon: "📘", href: "https://facebook.com/yourpage" },
    SocialLink { label: "Instagram", icon: "📸", href: "https://instagram.com/yourhandle" },
];

pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink { label: "Facebook", icon: "📘", href: "https://facebook.com" },
    SocialLink { label: "Instagram", icon: "📸", href: "https://instagram.com" },
    SocialLink { label: "YouTube", icon: "▶️", href: "https://youtube.com" },
    SocialLink { label: "WhatsApp", icon: "💬", href: "https://wa.me/15551234567" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { icon: "", value: "10K+", label: "Happy Members" },
    Stat { icon: "", value: "50+", label: "Expert Trainers" },
    Stat { icon: "", value: "95%", label: "Success Rate" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { icon: "👥", value: "10K+", label: "Happy Members" },
    Stat { icon: "🏆", value: "15+", label: "Years Experience" },
    Stat { icon: "⏰", value: "24/7", label: "Support Available" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Founded in 2010, we've been transforming lives through fitness with our state-of-the-art facilities and expert trainers. Our mission is to make premium fitness accessible to everyone.",
    "With over 10,000 square feet of training space, cutting-edge equipment, and a supportive community, we provide the perfect environment to achieve your fitness goals.",
    "Our certified trainers bring an average of 8 years experience, specializing in everything from weight loss to competitive athletic training.",
];

pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactItem {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const CONTACT_ITEMS: &[ContactItem] = &[
    ContactItem { icon: "📞", text: "+1 (555) 123-4567" },
    ContactItem { icon: "✉️", text: "info@fitlife.com" },
    ContactItem { icon: "📍", text: "123 Fitness St, City, ST 12345" },
];

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "/" },
    NavLink { name: "Classes", href: "/classes" },
    NavLink { name: "Trainers", href: "/trainers" },
    NavLink { name: "Membership", href: "/membership" },
    NavLink { name: "Contact", href: "/contact" },
];

pub const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "6:00 AM - 10:00 PM"),
    ("Saturday", "7:00 AM - 8:00 PM"),
    ("Sunday", "8:00 AM - 6:00 PM"),
];

pub const WHATSAPP_URL: &str = "https://wa.me/yourphonenumber";
pub const PHONE_URL: &str = "tel:+1234567890";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn testimonials_are_well_formed() {
        assert!(!TESTIMONIALS.is_empty());
        let ids: HashSet<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TESTIMONIALS.len());
        for t in TESTIMONIALS {
            assert!((1..=Testimonial::MAX_RATING).contains(&t.rating), "{}", t.name);
        }
    }

    #[test]
    fn stars_follow_rating() {
        let emma = TESTIMONIALS.iter().find(|t| t.name == "Emma Rodriguez").unwrap();
        assert_eq!(emma.stars(), [true, true, true, true, false]);
        assert!(TESTIMONIALS[0].stars().iter().all(|&s| s));
    }

    #[test]
    fn services_keep_their_prices() {
        let prices: Vec<&str> = SERVICES.iter().map(|s| s.price).collect();
        assert_eq!(prices, ["$99/month", "$299/month", "$149/month"]);
    }
}
