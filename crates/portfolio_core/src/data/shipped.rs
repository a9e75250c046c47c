use crate::model::portfolio::PortfolioData;
use crate::model::profile::{ExternalLink, PersonalInfo, ProfessionalContribution};
use crate::model::project::{Project, ProjectCategory, ProjectFeature, ProjectStatus, Technology};
use crate::model::skill::{Skill, SkillCategory};

use ProjectCategory::{Fullstack, Mobile, Professional, Tool};
use ProjectStatus::{Completed, Ongoing, Planned};

fn tech(name: &str, icon: &str) -> Technology {
    Technology::with_icon(name, icon)
}

fn feature(title: &str, description: &str, technologies: Vec<Technology>) -> ProjectFeature {
    ProjectFeature::new(title, description, technologies)
}

/// Builds the portfolio snapshot bundled with the app.
pub fn shipped_portfolio() -> PortfolioData {
    PortfolioData {
        personal_info: personal_info(),
        skills: skills(),
        projects: projects(),
        professional_contributions: professional_contributions(),
        educations: Vec::new(),
        external_links: external_links(),
    }
}

fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Younes MRABTI".to_string(),
        tagline: "Serving the code community".to_string(),
        description: "Full Stack Developer & GIS Specialist with expertise in modern web \
            technologies, mobile development, and geospatial solutions. Passionate about \
            creating innovative platforms and contributing to the developer community."
            .to_string(),
        avatar_url: "https://avatars.githubusercontent.com/ymrabti".to_string(),
        location: "Morocco".to_string(),
        email: "admin@youmrabti.com".to_string(),
    }
}

fn skills() -> Vec<Skill> {
    use SkillCategory::{Database, Dev, Gis, Ide, Ops};

    vec![
        Skill::new("Dart/Flutter", 95, Dev).with_icon("flutter"),
        Skill::new("JavaScript/Node.js/React", 90, Dev).with_icon("javascript"),
        Skill::new("TypeScript/Angular/NestJS", 95, Dev).with_icon("angular"),
        Skill::new("C#/.NET", 85, Dev).with_icon("dotnet"),
        Skill::new("Java", 80, Dev).with_icon("java"),
        Skill::new("Kotlin/Android", 85, Dev).with_icon("android"),
        Skill::new("Swift/iOS", 75, Dev).with_icon("swift"),
        Skill::new("Docker", 85, Ops).with_icon("docker"),
        Skill::new("Reverse Proxy/Cloudflare", 80, Ops).with_icon("cloudflare"),
        Skill::new("VibeCoding", 90, Ops).with_icon("code"),
        Skill::new("PostgreSQL", 90, Database).with_icon("postgresql"),
        Skill::new("SQL Server", 85, Database).with_icon("sql-server"),
        Skill::new("MySQL", 85, Database).with_icon("mysql"),
        Skill::new("MongoDB", 90, Database).with_icon("mongodb"),
        Skill::new("ArcGIS Online", 95, Gis).with_icon("arcgis"),
        Skill::new("ArcGIS Enterprise", 90, Gis).with_icon("arcgis"),
        Skill::new("ArcGIS Developers", 95, Gis).with_icon("arcgis-dev"),
        Skill::new("QGIS", 85, Gis).with_icon("qgis"),
        Skill::new("VSCode", 95, Ide).with_icon("vscode"),
        Skill::new("IntelliJ", 85, Ide).with_icon("intellij"),
        Skill::new("XCode", 80, Ide).with_icon("xcode"),
    ]
}

fn projects() -> Vec<Project> {
    let mut projects = fullstack_projects();
    projects.extend(mobile_projects());
    projects.extend(tool_projects());
    projects
}

fn fullstack_projects() -> Vec<Project> {
    vec![
        Project::new(
            "qr-checks",
            "Presence flow with QR Codes",
            "Platform for check-in presence/leave of employees, students, business staff, \
             stores via short temporary QR codes shown dynamically",
            Fullstack,
            Ongoing,
        )
        .with_image("res://presence_flow")
        .with_live("https://qrchecks.youmrabti.com")
        .with_features(vec![
            feature(
                "Backend/Database",
                "Real-time QR code management and validation system",
                vec![
                    tech("Node.js", "nodejs"),
                    tech("Express", "express"),
                    tech("MySQL", "mysql"),
                    tech("Socket.io", "socketio"),
                ],
            ),
            feature(
                "Mobile App",
                "Two user types: Gates show QR codes, users scan QR codes",
                vec![tech("Dart", "dart"), tech("Flutter", "flutter")],
            ),
            feature(
                "Backoffice",
                "Statistics, configurations, absence justification/confirming, reporting",
                vec![tech("TypeScript", "typescript"), tech("Angular", "angular")],
            ),
        ]),
        Project::new(
            "chatup",
            "ChatUp",
            "Modern end-to-end encryption chat application supporting group chats and file \
             sharing",
            Fullstack,
            Ongoing,
        )
        .with_live("https://chat-up.youmrabti.com/")
        .with_image("res://chatup")
        .with_features(vec![
            feature(
                "Backend/Database",
                "Secure messaging infrastructure with real-time capabilities",
                vec![
                    tech("JavaScript", "javascript"),
                    tech("Node.js", "nodejs"),
                    tech("MongoDB", "mongodb"),
                ],
            ),
            feature(
                "Mobile App",
                "End-to-end encryption with X25519, secure storage, IndexedDB",
                vec![
                    tech("Dart", "dart"),
                    tech("Flutter", "flutter"),
                    tech("X25519 Encryption", "security"),
                    tech("Cryptography", "security"),
                ],
            ),
            feature(
                "Presentation",
                "App description, releases, email verification and reset password callbacks",
                vec![tech("Web Technologies", "web")],
            ),
        ]),
        Project::new(
            "pharmacie-de-garde",
            "Pharmacie de Garde Morocco",
            "Web platform for locating on-duty pharmacies in Morocco with geolocation and \
             search features",
            Fullstack,
            Ongoing,
        )
        .with_image("res://pharmacie_de_garde")
        .with_technologies(vec![
            tech("Next.js", "nextjs"),
            tech("TypeScript", "typescript"),
            tech("PostgreSQL", "postgresql"),
        ]),
        Project::new(
            "rifq",
            "RIFQ",
            "RIFQ is a national digital platform for the identification, monitoring, and \
             humane management of domestic and stray animals, supporting public health, \
             animal welfare, and data-driven territorial governance.",
            Fullstack,
            Planned,
        )
        .with_image("res://rifq"),
        Project::new(
            "apple-health",
            "AppleHealth",
            "Health social platform where users share Apple Health export data analysis and \
             personal health dashboards (steps, running/walking distance, calories, exercise \
             minutes)",
            Fullstack,
            Completed,
        )
        .with_live("https://healthy.youmrabti.com/")
        .with_github("https://github.com/ymrabti/apple_health_ng")
        .with_image("res://apple_health")
        .with_features(vec![
            feature(
                "Data Processing",
                "Secure script that reads and interprets Apple Health data",
                vec![tech("Python", "python"), tech("Data Analysis", "analytics")],
            ),
            feature(
                "Backend & Database",
                "Health data management and secure server communication",
                vec![
                    tech("Node.js", "nodejs"),
                    tech("Express", "express"),
                    tech("PostgreSQL", "postgresql"),
                ],
            ),
            feature(
                "Frontend Dashboard",
                "Personal health dashboard and social sharing features",
                vec![tech("Angular", "angular")],
            ),
        ]),
        Project::new(
            "streetview-xeno",
            "StreetViewXeno",
            "360° images viewer platform based on Krpano viewer with timeline, map \
             integration, directional hotspots, and XLSX mass upload system",
            Fullstack,
            Completed,
        )
        .with_live("https://streetview_client.youmrabti.com/")
        .with_image("res://streetview")
        .with_technologies(vec![
            tech("Krpano", "panorama"),
            tech("JavaScript", "javascript"),
            tech("XLSX", "excel"),
        ])
        .with_features(vec![
            feature(
                "Viewer Platform",
                "360° visualization with timeline and map containing related spots",
                vec![tech("Krpano", "panorama"), tech("Web Technologies", "web")],
            ),
            feature(
                "Upload System",
                "XLSX images uploader with custom generator and multiresolution converter",
                vec![
                    tech("Image Processing", "image"),
                    tech("XLSX Generator", "excel"),
                ],
            ),
            feature(
                "Advanced Features",
                "Directional hotspots and mass images upload with conversion",
                vec![
                    tech("Image Converter", "transform"),
                    tech("Krpano Integration", "integration"),
                ],
            ),
        ]),
    ]
}

fn mobile_projects() -> Vec<Project> {
    vec![
        Project::new(
            "botola-max",
            "BotolaMax",
            "Mobile application for football matches, competitions, and results with \
             comprehensive statistics",
            Mobile,
            Completed,
        )
        .with_image("res://botola_max")
        .with_features(vec![feature(
            "Football Data Management",
            "Live matches, competitions, and relevant statistics",
            vec![
                tech("Flutter", "flutter"),
                tech("Sports APIs", "sports"),
                tech("Data Analytics", "analytics"),
            ],
        )]),
        Project::new(
            "geolight-meter",
            "Geolight Meter",
            "Mobile tool for collection of lux light data with geolocation, handles XLSX \
             exports for analysis",
            Mobile,
            Completed,
        )
        .with_play_store("https://play.google.com/store/apps/details?id=com.ymrabtiapps.geoligtmeter")
        .with_image("res://geolight_meter")
        .with_features(vec![feature(
            "Light & Location Data",
            "Lux data collection with precise GPS coordinates",
            vec![
                tech("Flutter", "flutter"),
                tech("Light Sensors", "sensor"),
                tech("GPS/Geolocation", "location"),
                tech("XLSX Export", "excel"),
            ],
        )]),
        Project::new(
            "pharmagest",
            "Pharmagest",
            "Pharmacy management mobile application for inventory, sales, and customer \
             management (ongoing)",
            Mobile,
            Ongoing,
        )
        .with_play_store("https://play.google.com/store/apps/details?id=com.ymrabtiapps.pharmagest")
        .with_image("res://pharmagest")
        .with_features(vec![feature(
            "Pharmacy Management",
            "Complete pharmacy operations and inventory management",
            vec![
                tech("Flutter", "flutter"),
                tech("Database Management", "database"),
                tech("Business Logic", "business"),
            ],
        )]),
    ]
}

fn tool_projects() -> Vec<Project> {
    vec![
        Project::new(
            "portfolio-website",
            "Portfolio Website",
            "This stunning Angular portfolio showcasing skills, projects, and professional \
             experience",
            Tool,
            Completed,
        )
        .with_image("https://avatars.githubusercontent.com/ymrabti")
        .with_live("https://youmrabti.com")
        .with_features(vec![feature(
            "Modern Portfolio",
            "Comprehensive showcase of expertise and experience",
            vec![
                tech("Angular", "angular"),
                tech("TypeScript", "typescript"),
                tech("GSAP Animations", "animation"),
            ],
        )]),
        Project::new(
            "svg-playground",
            "SVG Playground",
            "Create stunning SVG graphics with free online generator. Design polygons, stars, \
             spirals, and curved shapes with real-time preview. Export as SVG or PNG.",
            Tool,
            Completed,
        )
        .with_github("https://github.com/ymrabti/svg-playground")
        .with_live("https://svg-playground.youmrabti.com")
        .with_image("res://svg_playground")
        .with_features(vec![feature(
            "SVG Creation Tool",
            "Real-time SVG generation with multiple shape types",
            vec![
                tech("JavaScript", "javascript"),
                tech("SVG", "svg"),
                tech("Canvas", "canvas"),
            ],
        )]),
        Project::new(
            "power-geojson",
            "PowerGeoJSON",
            "Powerful tool for GeoJSON with flutter_map, styled from properties, supports \
             Esri JSON, soon supports multiple projections",
            Tool,
            Completed,
        )
        .with_github("https://github.com/youmtinetflutterpacks/power_geojson")
        .with_live("https://pub.dev/packages/power_geojson")
        .with_image("res://power_geojson")
        .with_features(vec![feature(
            "Flutter Package (pub.dev)",
            "Advanced GeoJSON processing with flutter_map integration",
            vec![
                tech("Dart", "dart"),
                tech("Flutter", "flutter"),
                tech("GeoJSON", "geojson"),
                tech("Esri JSON", "esri"),
            ],
        )]),
        Project::new(
            "flutter-azimuth",
            "Flutter Azimuth",
            "Flutter Compass Tools Implementation measuring azimuth angle between magnetic \
             north and device orientation",
            Tool,
            Completed,
        )
        .with_github("https://github.com/youmtinetflutterpacks/flutter_azimuth")
        .with_live("https://pub.dev/packages/flutter_azimuth")
        .with_features(vec![feature(
            "Compass Plugin (pub.dev)",
            "Precise azimuth measurement for navigation apps",
            vec![
                tech("Flutter", "flutter"),
                tech("Compass Sensors", "sensor"),
                tech("Magnetometer", "sensor"),
            ],
        )]),
        Project::new(
            "popup-menu-2",
            "Popup Menu 2",
            "Popup menu with clickable buttons and global click function to maintain user \
             attention without breaking focus",
            Tool,
            Completed,
        )
        .with_github("https://github.com/youmtinetflutterpacks/popup_menu_2")
        .with_live("https://pub.dev/packages/popup_menu_2")
        .with_features(vec![feature(
            "UI Component (pub.dev)",
            "User-attention focused popup menu design",
            vec![
                tech("Flutter", "flutter"),
                tech("UI/UX Design", "design"),
                tech("Dart", "dart"),
            ],
        )]),
        Project::new(
            "json-dart-converter",
            "JSON to Dart Model Converter",
            "Online tool for converting JSON data structures to Dart model classes \
             automatically",
            Tool,
            Completed,
        )
        .with_github("https://github.com/ymrabti/vscode-dartify")
        .with_features(vec![feature(
            "Code Generation Tool",
            "Automated Dart model class generation from JSON",
            vec![
                tech("JavaScript", "javascript"),
                tech("JSON Parser", "json"),
                tech("Code Generation", "code"),
            ],
        )]),
        Project::new(
            "image-360-converter",
            "Image 360° Converter",
            "Convert 360° images to multiresolution format with XLSX generator for \
             StreetViewXeno integration",
            Tool,
            Completed,
        )
        .with_features(vec![feature(
            "Image Processing Tool",
            "Multiresolution conversion and XLSX generation for 360° platforms",
            vec![
                tech("Image Processing", "image"),
                tech("XLSX Generation", "excel"),
                tech("Krpano Integration", "integration"),
            ],
        )]),
        Project::new(
            "soil-moisture-fetcher",
            "Soil Moisture Fetcher",
            "Automated soil moisture monitoring system using satellite remote sensing data \
             from Sentinel-1 and NASA SMAP for precision agriculture",
            Tool,
            Completed,
        )
        .with_github("https://github.com/ymrabti/soil-moisture-fetcher")
        .with_features(vec![
            feature(
                "Satellite Data Processing",
                "Daily imagery retrieval, moisture maps generation, GeoTIFF/JPEG exports",
                vec![
                    tech("Python", "python"),
                    tech("Google Earth Engine", "earth-engine"),
                    tech("Docker", "docker"),
                    tech("PostgreSQL", "postgresql"),
                ],
            ),
            feature(
                "Automated Monitoring",
                "Real-time tracking with notifications for smart irrigation and environmental \
                 research",
                vec![
                    tech("Sentinel-1", "satellite"),
                    tech("NASA SMAP", "satellite"),
                    tech("Automation", "automation"),
                ],
            ),
        ]),
        Project::new(
            "pc-cleaner",
            "Automatic PC Cleaner",
            "Automated Windows system maintenance script running weekly to clean temp files, \
             clear caches, empty Recycle Bin, and optimize disk space",
            Tool,
            Completed,
        )
        .with_features(vec![feature(
            "System Maintenance",
            "Hands-free system optimization with automated logging and email reporting",
            vec![
                tech("PowerShell", "powershell"),
                tech("Task Scheduler", "windows"),
                tech("Email Automation", "email"),
            ],
        )]),
    ]
}

fn professional_contributions() -> Vec<ProfessionalContribution> {
    vec![ProfessionalContribution {
        company: "Marafik/Majal Berkane".to_string(),
        role: "Full Stack Developer & GIS Specialist".to_string(),
        period: "2020 - Present".to_string(),
        description: "Designed and delivered dynamic geospatial solutions, including \
            real-time map generation, statistical analysis, and distance measurement. Managed \
            the full data lifecycle—collection, conversion, cleaning, processing, analysis, and \
            interoperability—using advanced GIS workflows. Led ArcGIS Online data collection \
            initiatives and developed interactive dashboards to support urban development \
            projects and enhance digital citizen services through innovative, data-driven \
            solutions."
            .to_string(),
        projects: vec![
            Project::new(
                "find-tobissi",
                "Find Tobissi",
                "Mobile application for estimating bus arrival time and distance to improve \
                 public transportation experience",
                Professional,
                Completed,
            )
            .with_features(vec![feature(
                "Real-time Bus Tracking",
                "GPS-based bus location tracking with accurate arrival time estimation",
                vec![
                    tech("Mobile Development", "mobile"),
                    tech("GPS Tracking", "location"),
                    tech("Real-time Data", "real-time"),
                ],
            )]),
            Project::new(
                "eco-geste",
                "ÉCO-GESTE",
                "Ecological awareness mobile application encouraging citizens to sort waste \
                 with reward points convertible to gifts, promoting environmental \
                 sustainability",
                Professional,
                Completed,
            )
            .with_features(vec![feature(
                "Gamification & Rewards",
                "Point-based reward system for ecological behavior with gift conversion",
                vec![
                    tech("Mobile Development", "mobile"),
                    tech("Gamification", "game"),
                    tech("Reward System", "reward"),
                ],
            )]),
            Project::new(
                "borne-citoyenne",
                "Borne Citoyenne",
                "Citizen service application for Berkane commune measuring satisfaction \
                 levels and providing comprehensive service information to improve citizen \
                 engagement",
                Professional,
                Completed,
            )
            .with_features(vec![feature(
                "Citizen Services Platform",
                "Satisfaction surveys, document consultation, and service information \
                 management",
                vec![
                    tech("Mobile Development", "mobile"),
                    tech("Data Synchronization", "sync"),
                    tech("Survey System", "survey"),
                ],
            )]),
        ],
    }]
}

fn external_links() -> Vec<ExternalLink> {
    vec![
        ExternalLink::new(
            "GitHub - Main Profile",
            "https://github.com/ymrabti",
            "github",
            "Main repositories and contributions",
        ),
        ExternalLink::new(
            "GitHub - Flutter Packages",
            "https://github.com/youmtinetflutterpacks",
            "github",
            "Organization for Flutter packages",
        ),
        ExternalLink::new(
            "GitHub - Flutter Apps",
            "https://github.com/youmtinet-flutter-apps",
            "github",
            "Organization for Flutter applications",
        ),
        ExternalLink::new(
            "LinkedIn",
            "https://linkedin.com/in/younesmrabti1996",
            "linkedin",
            "Professional network and updates",
        ),
        ExternalLink::new(
            "Patreon",
            "https://patreon.com/youmrabti",
            "patreon",
            "Support my open source work",
        ),
    ]
}
