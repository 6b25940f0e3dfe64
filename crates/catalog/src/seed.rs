//! Static store inventory. Edited by hand when the shop's price list
//! changes; stock counts are adjusted at runtime via the admin command.

use grocer_core::types::{Category, Product};

const DEFAULT_STOCK: u32 = 10;

fn category(name: &str, items: &[(&str, f64, &str)]) -> Category {
    let mut cat = Category::new(name);
    for (name, price, description) in items {
        cat.add_product(Product::new(name, *price, description, DEFAULT_STOCK));
    }
    cat
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        category(
            "Pantry",
            &[
                ("Ace Instant Porridge 1kg Assorted", 27.99, "Instant porridge mix"),
                ("All Gold Tomato Sauce 700g", 44.99, "Tomato sauce"),
                ("Aromat Original 50g", 24.99, "Seasoning"),
                ("Bakers Inn Bread", 23.99, "Brown loaf bread"),
                ("Bakers Inn White Loaf", 23.99, "White loaf bread"),
                ("Bella Macaroni 3kg", 82.99, "Macaroni pasta"),
                ("Bisto Gravy 125g", 19.99, "Gravy mix"),
                ("Blue Band Margarine 500g", 44.99, "Margarine"),
                ("Blue Ribbon Self Raising 2kg", 37.99, "Self-raising flour"),
                ("Bokomo Cornflakes 1kg", 54.90, "Cornflakes"),
                ("Bullbrand Corned Beef 300g", 39.99, "Corned beef"),
                ("Buttercup Margarine 500g", 44.99, "Margarine"),
                ("Cashel Valley Baked Beans 400g", 18.99, "Baked beans"),
                ("Cerevita 500g", 69.99, "Cereal"),
                ("Cookmore Cooking Oil 2L", 67.99, "Cooking oil"),
                ("Cross and Blackwell Mayonnaise 700g", 49.99, "Mayonnaise"),
                ("Dried Kapenta 1kg", 134.99, "Dried fish"),
                ("Ekonol Rice 5kg", 119.29, "Rice"),
                ("Fattis Macaroni 500g", 22.99, "Macaroni"),
                ("Gloria Self Raising Flour 5kg", 79.90, "Self-raising flour"),
                ("Jungle Oats 1kg", 44.99, "Oats"),
                ("Knorr Brown Onion Soup 50g", 7.99, "Onion soup mix"),
                ("Lucky Star Pilchards in Tomato Sauce 155g", 17.99, "Pilchards"),
                ("Mahatma Rice 2kg", 52.99, "Rice"),
                ("Peanut Butter 350ml", 19.99, "Peanut butter"),
                ("Roller Meal 10kg- Zim Meal", 136.99, "Maize meal"),
            ],
        ),
        category(
            "Beverages",
            &[
                ("Stella Teabags 100 Pack", 42.99, "Tea bags"),
                ("Mazoe Raspberry 2 Litres", 67.99, "Fruit drink"),
                ("Cremora Creamer 750g", 72.99, "Coffee creamer"),
                ("Everyday Milk Powder 400g", 67.99, "Milk powder"),
                ("Freshpack Rooibos 80s", 84.99, "Rooibos tea"),
                ("Nestle Gold Cross Condensed Milk 385g", 29.99, "Condensed milk"),
                ("Pine Nut Soft Drink 2L", 37.99, "Soft drink"),
                ("Mazoe Blackberry 2L", 68.99, "Fruit drink"),
                ("Quench Mango 2L", 32.99, "Fruit drink"),
                ("Coca Cola 2L", 39.99, "Soft drink"),
                ("Pfuko Dairibord Maheu 500ml", 14.99, "Maheu drink"),
                ("Sprite 2 Litres", 37.99, "Soft drink"),
                ("Pepsi (500ml x 24)", 178.99, "Soft drink pack"),
                ("Probands Milk 500ml", 20.99, "Steri milk"),
                ("Lyons Hot Chocolate 125g", 42.99, "Hot chocolate"),
                ("Dendairy Long Life Full Cream Milk 1 Litre", 28.99, "Long life milk"),
                ("Joko Tea Bags 100", 55.99, "Tea bags"),
                ("Cool Splash 5 Litre Orange Juice", 99.99, "Orange juice"),
                ("Cremora Coffee Creamer 750g", 72.99, "Coffee creamer"),
                ("Fanta Orange 2 Litres", 37.99, "Soft drink"),
                ("Quench Mango 5L", 92.25, "Fruit drink"),
                ("Ricoffy Coffee 250g", 52.99, "Coffee"),
                ("Dendairy Low Fat Long Life Milk", 28.99, "Low fat milk"),
                ("Quickbrew Teabags 50", 25.99, "Teabags"),
                ("Fruitrade 2L Orange Juice", 32.90, "Orange juice"),
                ("Mazoe Orange Crush 2L", 69.99, "Fruit drink"),
                ("Joko Rooibos Tea Bags 80s", 84.99, "Rooibos tea"),
            ],
        ),
        category(
            "Household",
            &[
                ("Sta Soft Lavender 2L", 59.99, "Fabric softener"),
                ("Sunlight Dishwashing Liquid 750ml", 35.99, "Dishwashing liquid"),
                ("Nova 2-Ply Toilet Paper 9s", 49.90, "Toilet paper"),
                ("Domestos Thick Bleach Assorted 750ml", 39.99, "Bleach cleaner"),
                ("Doom Odourless Multi-Insect Killer 300ml", 32.90, "Insect killer"),
                ("Handy Andy Assorted 500ml", 32.99, "Multi-surface cleaner"),
                ("Jik Assorted 750ml", 29.99, "Disinfectant"),
                ("Maq Dishwashing Liquid 750ml", 35.99, "Dishwashing liquid"),
                ("Maq 3kg Washing Powder", 72.90, "Washing powder"),
                ("Maq Handwashing Powder 2kg", 78.99, "Handwashing powder"),
                ("Elangeni Washing Bar 1kg", 24.59, "Washing bar"),
                ("Vim Scourer 500g", 21.99, "Scouring pad"),
                ("Matches Carton (10s)", 8.99, "Matches"),
                ("Surf 5kg", 159.99, "Washing powder"),
                ("Britelite Candles 6s", 32.99, "Candles"),
                ("Sta-Soft Assorted Refill Sachet 2L", 39.99, "Fabric softener refill"),
                ("Poppin Fresh Dishwashing Liquid 750ml", 22.99, "Dishwashing liquid"),
                ("Poppin Fresh Toilet Cleaner 500ml", 34.99, "Toilet cleaner"),
                ("Poppin Fresh Multi-Purpose Cleaner", 25.99, "Multi-purpose cleaner"),
            ],
        ),
        category(
            "Personal Care",
            &[
                ("Softex Toilet Tissue 1-Ply 4s", 39.99, "Toilet tissue"),
                ("Protex Bath Soap Assorted 150g", 21.99, "Bath soap"),
                ("Sona Bath Soap 300g", 13.99, "Bath soap"),
                ("Kiwi Black Shoe Polish 50ml", 18.99, "Shoe polish"),
                ("Nivea Women's Roll On Assorted 50ml", 33.99, "Deodorant"),
                ("Clere Lanolin Lotion 400ml", 35.99, "Body lotion"),
                ("Vaseline Men Petroleum Jelly 250ml", 9.99, "Petroleum jelly"),
                ("Vaseline Petroleum Jelly Original 250ml", 39.99, "Petroleum jelly"),
                ("Sunlight Bath Soap Lively Lemon 175g", 10.90, "Bath soap"),
                ("Shield Fresh Shower Deo", 24.99, "Deodorant"),
                ("Hoity Toity Ladies Spray", 22.90, "Ladies spray"),
                ("Brut Total Attraction Roll On", 17.90, "Deodorant"),
                ("Vaseline Men Lotion 400ml", 64.99, "Body lotion"),
                ("Shield Dry Musk Roll On 50ml", 24.99, "Deodorant"),
                ("Sunlight Bath Soap Juicy Orange 150g", 10.99, "Bath soap"),
                ("Axe Men Roll On Wild Spice", 32.99, "Deodorant"),
                ("Nivea Rich Nourishing Cream 400ml", 79.99, "Body cream"),
                ("Dawn Rich Lanolin Lotion 400ml", 24.90, "Body lotion"),
                ("Twinsaver 2-Ply Toilet Paper", 32.90, "Toilet paper"),
                ("Hoity Toity Body Lotion 400ml", 44.90, "Body lotion"),
                ("Axe Deo Assorted Men", 36.99, "Deodorant"),
                ("Stayfree Pads Scented Wings 10s", 15.99, "Sanitary pads"),
                ("Geisha Bath Soap", 9.90, "Bath soap"),
                ("Clere Berries and Cream 500ml", 39.99, "Body lotion"),
                ("Clere Body Cream Cocoa Butter 500ml", 39.99, "Body cream"),
                ("Ingram's Camphor Cream Herbal 500ml", 57.99, "Herbal cream"),
                ("Lifebuoy Lemon Fresh 175g", 16.99, "Bath soap"),
                ("Aquafresh Fresh and Minty Toothpaste 100ml", 22.99, "Toothpaste"),
                ("Lil Lets Pads Super Maxi Thick 8s", 13.99, "Sanitary pads"),
                ("Nivea Men Lotion (Assorted) 400ml", 79.99, "Body lotion"),
                ("Nivea Men Cream (Assorted) 400ml", 79.99, "Body cream"),
                ("Nivea Body Creme Deep Impact 400ml", 79.99, "Body cream"),
                ("Clere Berries and Creme Lotion 400ml", 35.99, "Body lotion"),
                ("Clere Men 400ml Lotion Assorted", 35.99, "Men's lotion"),
                ("Pearl/Sona Bath Soap Assorted 200g", 13.99, "Bath soap"),
                ("Nivea Intensive Moisturizing Creme 500ml", 79.99, "Moisturizing cream"),
                ("Protex for Men Assorted Bath Soap 150g", 21.99, "Bath soap"),
                ("Axe Roll On Assorted", 36.99, "Deodorant"),
                ("Satiskin Floral Bouquet 2L", 99.99, "Body wash"),
                ("Nivea Deep Impact Lotion 400ml", 79.99, "Body lotion"),
                ("Nivea Ladies Deo Pearl Beauty", 32.90, "Deodorant"),
                ("Nivea Rich Nourishing Lotion 400ml", 79.99, "Body lotion"),
                ("Nivea Deo Dry Confidence Women 150ml", 32.99, "Deodorant"),
                ("Dove Roll On Assorted", 26.99, "Deodorant"),
                ("Satiskin Foam Bath Berry Fantasy 2L", 99.99, "Foam bath"),
                ("Clere Glycerin 100ml", 21.99, "Glycerin"),
                ("Nivea Body Creme Max Hydration 400ml", 79.99, "Body cream"),
                ("Clere Men Body Cream Assorted 400ml", 39.99, "Men's body cream"),
                ("Nivea Intensive Moisturizing Lotion 400g", 79.99, "Moisturizing lotion"),
                ("Lux Soft Touch 175g", 21.99, "Bath soap"),
                ("Lifebuoy Total 10 175g", 16.99, "Bath soap"),
                ("Jade Bath Soap Assorted", 12.60, "Bath soap"),
                ("Stayfree Pads Unscented Wings 10s", 19.90, "Sanitary pads"),
                ("Colgate 100ml", 18.99, "Toothpaste"),
                ("Clere Men Fire 450ml", 39.99, "Men's lotion"),
                ("Shield Men's Roll On Assorted", 24.99, "Deodorant"),
                ("Shower to Shower Ladies Deodorant", 27.99, "Deodorant"),
                ("Lux Soft Caress 175g", 21.99, "Bath soap"),
                ("Nivea Men Revitalizing Body Cream 400g", 79.99, "Body cream"),
                ("Clere Cocoa Butter Lotion 400ml", 32.99, "Body lotion"),
                ("Shield Women's Roll On Assorted", 24.99, "Deodorant"),
                ("Nivea All Season Body Lotion 400ml", 79.99, "Body lotion"),
                ("Nivea Men Roll On Assorted 50ml", 33.99, "Deodorant"),
                ("Protex Deep Clean Bath Soap 150g", 21.99, "Bath soap"),
                ("Sunlight Cooling Mint Bathing Soap 150g", 10.99, "Bath soap"),
                ("Dettol 250ml", 25.99, "Antiseptic liquid"),
                ("Woods Peppermint 100ml", 46.90, "Body spray"),
                ("Med Lemon Sachet 6.1g", 7.90, "Lemon sachet"),
                ("Predo Adult Diapers 30s (M/L/XL)", 317.99, "Adult diapers"),
                ("Ingram's Camphor Moisture Plus 500ml", 59.99, "Moisturizing cream"),
                ("Disposable Face Mask 50s", 39.99, "Face masks"),
            ],
        ),
        category(
            "Snacks and Sweets",
            &[
                ("Jena Maputi 15pack", 23.99, "Popcorn"),
                ("Tiggies Assorted 50s", 74.99, "Snacks"),
                ("L Choice Assorted Biscuits", 12.90, "Biscuits"),
                ("Sneaker Nax Bale Pack 2kg", 39.90, "Snacks"),
                ("Yogueta Lollipop Split Pack 48 Pack", 59.99, "Lollipops"),
                ("Arenel Choice Assorted Biscuits 150g", 19.90, "Biscuits"),
                ("Willards Things 150g", 14.99, "Cheese snacks"),
                ("Stumbo Assorted Lollipops 48s", 59.99, "Lollipops"),
                ("Pringles Original 110g", 22.90, "Potato chips"),
                ("Nibble Naks 20pack", 29.99, "Snacks"),
                ("King Kurls Chicken Flavour 100g", 12.90, "Snacks"),
                ("Nik Naks 50s Pack Assorted", 54.90, "Snacks"),
                ("Proton Ramba Waraira Cookies 1kg", 68.99, "Cookies"),
                ("Lobels Marie Biscuits", 6.90, "Biscuits"),
                ("Chocolate Coated Biscuits", 35.99, "Chocolate biscuits"),
                ("Top 10 Assorted Sweets", 9.90, "Assorted sweets"),
                ("Jelido Magic Rings 102 Pieces", 48.90, "Candy rings"),
                ("Lays Assorted Flavours 105g", 52.99, "Potato chips"),
                ("Charhons Biscuits 2kg", 99.99, "Biscuits"),
                ("Zap Nax Cheese and Onion 100g", 3.99, "Snacks"),
            ],
        ),
        category(
            "Fresh Groceries",
            &[
                ("Economy Steak on Bone Beef Cuts 1kg", 147.99, "Fresh beef"),
                ("Parmalat Cheddar Cheese", 89.99, "Cheddar cheese slices"),
                ("Colcom Beef Polony 3kg", 299.00, "Beef polony"),
                ("Colcom Tastee French Polony 750g", 116.99, "French polony"),
                ("Colcom Chicken Polony 3kg", 219.90, "Chicken polony"),
                ("Bulk Mixed Pork 1kg", 128.99, "Mixed pork"),
                ("Potatoes 7.5kg (Small Pocket)", 219.99, "Fresh potatoes"),
                ("Colcom Tastee Chicken Polony 1kg", 34.90, "Chicken polony"),
                ("Colcom Garlic Polony 3kg", 220.00, "Garlic polony"),
                ("Colcom Tastee Beef Polony 1kg", 35.00, "Beef polony"),
                ("Wrapped Mixed Size Fresh Eggs 30", 149.99, "Fresh eggs"),
                ("Texas Meats Juicy Boerewors", 159.99, "Boerewors"),
                ("Unwrapped Small Size Fresh Eggs 30s", 99.99, "Fresh eggs"),
                ("Irvines Mixed Chicken Cuts 2kg", 179.99, "Mixed chicken cuts"),
                ("Dairibord Yoghurt 150ml", 15.99, "Yoghurt"),
            ],
        ),
        category(
            "Stationery",
            &[
                ("Plastic Cover 3 Meter Roll", 7.99, "Plastic cover"),
                ("Ruler 30cm", 6.99, "Ruler"),
                ("A4 Bond Paper White", 126.99, "Bond paper"),
                ("Kakhi Cover 3 Meter Roll", 8.99, "Kakhi cover"),
                ("School Trunk", 750.00, "School trunk"),
                ("Oxford Maths Set", 34.99, "Maths set"),
                ("Grade 1-3 Exercise Book A4 32 Page (10 Pack)", 36.99, "Exercise books"),
                ("72 Page Newsprint Maths Book (10 Pack)", 69.99, "Maths books"),
                ("Cellotape Large 40yard", 5.99, "Cellotape"),
                ("Newsprint 2 Quire Counter Books (192 Page)", 28.99, "Counter books"),
                ("72 Page Newsprint Writing Exercise Book (10 Pack)", 69.99, "Writing exercise books"),
                ("Cellotape Small 20yard", 3.99, "Cellotape"),
                ("Eversharp Pens Set x 4", 14.99, "Pens set"),
                ("Newsprint 1 Quire (96 Page) Counter Book", 17.99, "Counter book"),
                ("HB Pencils x 12 Set", 24.99, "Pencils set"),
                ("Sharp Scientific Calculator", 319.99, "Scientific calculator"),
                ("32 Page Newsprint Plain Exercise Book (10 Pack)", 36.99, "Plain exercise books"),
            ],
        ),
        category(
            "Baby Section",
            &[
                ("Huggies Dry Comfort Jumbo Size 5 (44s)", 299.99, "Diapers"),
                ("Pampers Fresh Clean Wipes 64 Pack", 31.90, "Baby wipes"),
                ("Johnson and Johnson Scented Baby Jelly 325ml", 52.99, "Baby jelly"),
                ("Vaseline Baby Jelly 250g", 31.90, "Baby jelly"),
                ("Predo Baby Wipes Assorted 120s", 52.90, "Baby wipes"),
                ("Huggies Dry Comfort Size 3 Jumbo (76)", 299.99, "Diapers"),
                ("Huggies Dry Comfort Size 2 Jumbo (94)", 299.99, "Diapers"),
                ("Huggies Dry Comfort Size 4 Jumbo", 299.99, "Diapers"),
                ("Bennetts Aqueous Cream 500ml", 39.30, "Aqueous cream"),
                ("Predo Baby Wipes Assorted 80s", 38.99, "Baby wipes"),
                ("Crez Babyline Petroleum Jelly 500g", 42.99, "Petroleum jelly"),
                ("Johnson and Johnson Lightly Fragranced Aqueous Cream 350ml", 39.90, "Aqueous cream"),
                ("Nestle Baby Cereal with Milk Regular Wheat 250g", 34.99, "Baby cereal"),
                ("Nan 2: Infant Formula Optipro 400g", 79.99, "Infant formula"),
                ("Nan 1: Infant Formula Optipro 400g", 79.99, "Infant formula"),
            ],
        ),
    ]
}
