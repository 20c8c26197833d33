//! The `paodrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("paodrill.toml").exists() {
        println!("paodrill.toml already exists, skipping.");
    } else {
        std::fs::write("paodrill.toml", SAMPLE_CONFIG)?;
        println!("Created paodrill.toml");
    }

    if std::path::Path::new("pao.csv").exists() {
        println!("pao.csv already exists, skipping.");
    } else {
        std::fs::write("pao.csv", STARTER_TABLE)?;
        println!("Created pao.csv");
    }

    println!("\nNext steps:");
    println!("  1. Edit pao.csv with your own associations (keep all 100 rows)");
    println!("  2. Run: paodrill browse");
    println!("  3. Run: paodrill train");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# paodrill configuration

data_file = "pao.csv"
stats_file = "pao_stats.json"

[selector]
# Keys with lifetime accuracy below this cutoff count as weak.
weak_threshold = 0.7
# Share of draws taken from the weak pool.
weak_bias = 0.30
"#;

/// Starter 00..=99 association table. Meant to be edited; the trainer only
/// requires that every key has a non-empty triple.
const STARTER_TABLE: &str = "\
number,person,action,object
00,Ozzy Osbourne,Biting,Bat
01,Albert Einstein,Writing,Blackboard
02,Marilyn Monroe,Singing,Microphone
03,Michael Jordan,Dunking,Basketball
04,Charlie Chaplin,Twirling,Cane
05,Elvis Presley,Strumming,Guitar
06,Muhammad Ali,Punching,Punching Bag
07,James Bond,Shooting,Pistol
08,Pablo Picasso,Painting,Canvas
09,Usain Bolt,Sprinting,Starting Blocks
10,Napoleon,Riding,Horse
11,Bruce Lee,Kicking,Nunchaku
12,Freddie Mercury,Belting,Microphone Stand
13,Alfred Hitchcock,Filming,Camera
14,Serena Williams,Serving,Tennis Racket
15,Wolfgang Mozart,Composing,Piano
16,Steve Jobs,Unveiling,Smartphone
17,Cleopatra,Sailing,Barge
18,Chuck Norris,Chopping,Plank
19,Madonna,Dancing,Disco Ball
20,Sherlock Holmes,Inspecting,Magnifying Glass
21,Tiger Woods,Swinging,Golf Club
22,Marie Curie,Measuring,Test Tube
23,David Beckham,Bending,Football
24,Harry Houdini,Escaping,Straitjacket
25,Santa Claus,Hauling,Sack
26,Darth Vader,Dueling,Lightsaber
27,Audrey Hepburn,Browsing,Pearl Necklace
28,Arnold Schwarzenegger,Lifting,Barbell
29,Amelia Earhart,Flying,Propeller Plane
30,Winston Churchill,Puffing,Cigar
31,Lady Gaga,Posing,Meat Dress
32,Mr Bean,Fumbling,Teddy Bear
33,Mahatma Gandhi,Spinning,Spinning Wheel
34,Bob Marley,Jamming,Bongo Drums
35,Julia Child,Whisking,Saucepan
36,Neil Armstrong,Planting,Moon Flag
37,Frida Kahlo,Sketching,Easel
38,Homer Simpson,Munching,Donut
39,Robin Hood,Aiming,Longbow
40,William Shakespeare,Reciting,Quill
41,Batman,Gliding,Grappling Hook
42,Douglas Adams,Hitchhiking,Towel
43,Oprah Winfrey,Interviewing,Couch
44,Popeye,Flexing,Spinach Can
45,Ludwig van Beethoven,Conducting,Baton
46,Indiana Jones,Cracking,Whip
47,Marie Antoinette,Nibbling,Cake
48,Michael Phelps,Diving,Goggles
49,Willy Wonka,Tasting,Chocolate Bar
50,Superman,Soaring,Cape
51,Queen Elizabeth,Waving,Crown
52,Jackie Chan,Tumbling,Ladder
53,Vincent van Gogh,Dabbing,Sunflowers
54,Rocky Balboa,Jogging,Stairs
55,Evel Knievel,Jumping,Motorbike
56,Mary Poppins,Floating,Umbrella
57,Gordon Ramsay,Yelling,Frying Pan
58,Spider-Man,Slinging,Web
59,Pele,Juggling,Soccer Ball
60,Johnny Cash,Humming,Harmonica
61,Wonder Woman,Deflecting,Shield
62,Stephen Hawking,Calculating,Wheelchair
63,Jimi Hendrix,Shredding,Electric Guitar
64,Forrest Gump,Running,Box of Chocolates
65,Julius Caesar,Commanding,Chariot
66,Elton John,Performing,Grand Piano
67,Leonardo da Vinci,Inventing,Flying Machine
68,Mike Tyson,Jabbing,Mouthguard
69,Kurt Cobain,Smashing,Drum Kit
70,Isaac Newton,Pondering,Apple
71,Jack Sparrow,Staggering,Rum Bottle
72,Dracula,Lurking,Coffin
73,Hermione Granger,Casting,Wand
74,King Kong,Climbing,Skyscraper
75,Tarzan,Yodeling,Vine
76,Uncle Sam,Pointing,Top Hat
77,John Wayne,Galloping,Lasso
78,Yoda,Levitating,Walking Stick
79,Michelangelo,Chiseling,Marble Statue
80,Frankenstein,Lumbering,Bolts
81,Cristiano Ronaldo,Volleying,Trophy
82,Nikola Tesla,Sparking,Tesla Coil
83,Agatha Christie,Plotting,Typewriter
84,Zorro,Slashing,Rapier
85,Buzz Lightyear,Blasting,Jetpack
86,Cinderella,Rushing,Glass Slipper
87,Genghis Khan,Charging,Saddle
88,Gandalf,Summoning,Staff
89,Florence Nightingale,Bandaging,Lantern
90,Charles Darwin,Observing,Tortoise
91,Rambo,Camouflaging,Bandana
92,Aretha Franklin,Crooning,Feather Boa
93,Pinocchio,Fibbing,Wooden Nose
94,Hercules,Heaving,Boulder
95,Walt Disney,Doodling,Mouse Ears
96,Joan of Arc,Rallying,Banner
97,Sigmund Freud,Analyzing,Notebook
98,Bugs Bunny,Chomping,Carrot
99,Merlin,Brewing,Cauldron
";
