use clap::Parser;
use menu::{
    cart::Cart,
    items::{MenuItem, sample_menu},
    payment::PaymentIntent,
    settings::OrderSettings,
};
use qrcode::{QrCode, render::unicode};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Pay for a single menu item by id instead of the scripted cart order.
    item: Option<String>,
}

fn find<'a>(menu: &'a [MenuItem], id: &str) -> &'a MenuItem {
    menu.iter()
        .find(|item| item.id == id)
        .expect("unknown item id")
}

fn main() {
    let args = Args::parse();

    let settings = OrderSettings::default();
    let menu = sample_menu();

    println!("{} ({})\n", settings.restaurant_name, settings.hours);

    if !settings.qr_payment_enabled {
        println!("Płatność przy odbiorze w food trucku");
        return;
    }

    let intent = match args.item {
        Some(id) => PaymentIntent::for_item(find(&menu, &id)),
        None => {
            let mut cart = Cart::new();
            for id in ["1", "1", "3", "7"] {
                cart.add_item(find(&menu, id));
            }

            println!("Produkty: {}", cart.total_item_count());
            println!("Razem: {} zł", cart.total_price());

            PaymentIntent::for_cart(&cart)
        }
    };

    println!("\n{}", intent.title());
    println!("Kwota: {} gr", intent.amount_minor_units);
    println!("Opis: {}", intent.description);
    println!("{}\n", intent.url);

    let code = QrCode::new(intent.url.as_bytes()).expect("payment URL fits in a QR code");
    println!("{}", code.render::<unicode::Dense1x2>().build());
}
