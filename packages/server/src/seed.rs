use tracing::info;

use crate::config::AppConfig;
use crate::entity::account::NewAccount;
use crate::entity::dog::NewDog;
use crate::store::{MemStorage, Storage};
use crate::utils::hash;

/// Seed the bootstrap administrator. Exactly one account starts with the
/// admin flag set; everything else would have to be promoted by hand.
pub fn seed_admin(store: &MemStorage, config: &AppConfig) -> anyhow::Result<()> {
    let password = hash::hash_password(&config.auth.admin_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash bootstrap admin password: {e}"))?;

    let account = store.create_account(NewAccount {
        username: config.auth.admin_username.clone(),
        password,
    });
    store.make_admin(account.id);

    info!(username = %config.auth.admin_username, "Seeded bootstrap admin account");
    Ok(())
}

/// Seed a handful of demo listings so a fresh instance has something to
/// browse.
pub fn seed_demo_dogs(store: &MemStorage) {
    let demo_dogs = [
        NewDog {
            breed: Some("Labrador".into()),
            color: "Golden".into(),
            description: "Friendly male Labrador with a blue collar. Very energetic and loves \
                          to play. Responds to 'Max'."
                .into(),
            image_urls: vec![
                "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=500&auto=format&fit=crop".into(),
            ],
            address: "Central Park, Main Entrance".into(),
            city: "New York".into(),
            latitude: "40.7812".into(),
            longitude: "-73.9665".into(),
            date_found: "2025-03-28".into(),
            time_found: "14:30".into(),
            finder_name: "James Wilson".into(),
            finder_phone: "555-123-4567".into(),
            finder_email: "james.wilson@example.com".into(),
        },
        NewDog {
            breed: Some("German Shepherd".into()),
            color: "Black and Tan".into(),
            description: "Adult German Shepherd, appears well-trained. Has a red collar with \
                          no tag. Very calm and obedient."
                .into(),
            image_urls: vec![
                "https://images.unsplash.com/photo-1588943211346-0908a1fb0b01?w=500&auto=format&fit=crop".into(),
            ],
            address: "Washington Square Park".into(),
            city: "New York".into(),
            latitude: "40.7308".into(),
            longitude: "-73.9973".into(),
            date_found: "2025-03-29".into(),
            time_found: "09:15".into(),
            finder_name: "Sarah Miller".into(),
            finder_phone: "555-987-6543".into(),
            finder_email: "sarah.m@example.com".into(),
        },
        NewDog {
            breed: Some("Beagle".into()),
            color: "Tricolor".into(),
            description: "Small beagle puppy, about 6 months old. Has a green collar with a \
                          bell. Very playful and friendly."
                .into(),
            image_urls: vec![
                "https://images.unsplash.com/photo-1505628346881-b72b27e84530?w=500&auto=format&fit=crop".into(),
            ],
            address: "Prospect Park".into(),
            city: "Brooklyn".into(),
            latitude: "40.6602".into(),
            longitude: "-73.9690".into(),
            date_found: "2025-03-30".into(),
            time_found: "16:45".into(),
            finder_name: "David Johnson".into(),
            finder_phone: "555-234-5678".into(),
            finder_email: "david.j@example.com".into(),
        },
        NewDog {
            breed: Some("Husky".into()),
            color: "Gray and White".into(),
            description: "Beautiful adult husky with striking blue eyes. No collar but \
                          appears well-groomed and healthy. Very friendly with people."
                .into(),
            image_urls: vec![
                "https://images.unsplash.com/photo-1605568427561-40dd23c2acea?w=500&auto=format&fit=crop".into(),
            ],
            address: "Battery Park".into(),
            city: "New York".into(),
            latitude: "40.7033".into(),
            longitude: "-74.0170".into(),
            date_found: "2025-03-31".into(),
            time_found: "11:20".into(),
            finder_name: "Emily Chen".into(),
            finder_phone: "555-876-5432".into(),
            finder_email: "emily.chen@example.com".into(),
        },
        NewDog {
            breed: Some("Poodle".into()),
            color: "White".into(),
            description: "Small toy poodle, recently groomed. Wearing a pink collar with \
                          rhinestones but no identification tag."
                .into(),
            image_urls: vec![
                "https://images.unsplash.com/photo-1591160690555-5debfba289f0?w=500&auto=format&fit=crop".into(),
            ],
            address: "Bryant Park".into(),
            city: "New York".into(),
            latitude: "40.7536".into(),
            longitude: "-73.9832".into(),
            date_found: "2025-04-01".into(),
            time_found: "13:10".into(),
            finder_name: "Michael Brown".into(),
            finder_phone: "555-345-6789".into(),
            finder_email: "m.brown@example.com".into(),
        },
    ];

    let count = demo_dogs.len();
    for dog in demo_dogs {
        store.create_dog(dog);
    }
    info!("Seeded {} demo listings", count);
}
