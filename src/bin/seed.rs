use clap::Parser;
use ctrlxploit::{
    auth::AuthService,
    domain::{
        CreateLevelRequest, CreateMemberRequest, ProjectRequest, ResourceCategory,
        ResourceRequest,
    },
    repository::{
        LevelRepository, SqliteLevelRepository,
        MemberRepository, SqliteMemberRepository,
        ProfileRepository, SqliteProfileRepository,
        ProjectRepository, SqliteProjectRepository,
        ResourceRepository, SqliteResourceRepository,
    },
};
use sqlx::sqlite::SqlitePoolOptions;

/// Populates a fresh database with member levels, an admin login and the
/// starter project and resource lists. Tables that already hold rows are
/// left alone.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "sqlite://ctrlxploit.db?mode=rwc")]
    database_url: String,

    #[arg(long, default_value = "admin")]
    admin_username: String,

    #[arg(long, default_value = "admin123")]
    admin_password: String,

    #[arg(long, default_value = "infosec.org")]
    email_domain: String,

    /// Skip the sample roster.
    #[arg(long)]
    no_members: bool,
}

struct LevelSeed {
    name: &'static str,
    color: &'static str,
    icon: &'static str,
    members: &'static [&'static str],
}

const LEVELS: &[LevelSeed] = &[
    LevelSeed {
        name: "Root",
        color: "emerald",
        icon: "crown",
        members: &["TheAlpha", "begula03", "SRPG", "Al13n", "hidden_truth", "Masrt", "naughtyb0y.", "v1per"],
    },
    LevelSeed {
        name: "Moderator",
        color: "purple",
        icon: "trophy",
        members: &["4darsh", "e4stw1nd", "s4ych33se", "kannaya", "izmelucifer17", "Pr0meth3u5", "n0tsane", "cyb3rpunk_b4ddi3", "Drago"],
    },
    LevelSeed {
        name: "Sys-Admin",
        color: "rose",
        icon: "zap",
        members: &["bond@james", "SPYD3R", "_a.p.d_", "Cypher", "Ace_", "ethereum", "von", "H3lios", "samarth471", "extreme_substance", "_zafeiri", "Rajat", "V3n0m", "penguin"],
    },
    LevelSeed {
        name: "Club",
        color: "amber",
        icon: "users",
        members: &["iamgreedy", "armoredvortex", "AMRyan", "MiracleInvoker", "bhanu_praharsha", "cool_enough", "este", "Krißhn@", "Prisha", "parallax_79", "the_tenth_spear", "venomesh"],
    },
];

fn projects() -> Vec<ProjectRequest> {
    fn project(
        name: &str,
        short_detail: &str,
        photo: &str,
        repo: &str,
        live_demo: Option<&str>,
        technologies: &[&str],
    ) -> ProjectRequest {
        ProjectRequest {
            name: name.to_string(),
            short_detail: short_detail.to_string(),
            image_url: format!("https://images.unsplash.com/{}?auto=format&fit=crop&w=2070&q=80", photo),
            github_url: format!("https://github.com/CtrlXploit/{}", repo),
            live_demo: live_demo.map(String::from),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
        }
    }

    vec![
        project(
            "CtrlXploit Security Platform",
            "A comprehensive cybersecurity platform for vulnerability assessment and penetration testing with advanced reporting capabilities.",
            "photo-1555949963-aa79dcee981c",
            "security-platform",
            Some("https://security-platform.ctrlxploit.com"),
            &["React", "Node.js", "MongoDB", "Docker"],
        ),
        project(
            "Web Vulnerability Scanner",
            "An automated web application security scanner that identifies OWASP Top 10 vulnerabilities and provides detailed remediation guidance.",
            "photo-1558494949-ef010cbdcc31",
            "web-scanner",
            Some("https://scanner.ctrlxploit.com"),
            &["Python", "Flask", "SQLite", "BeautifulSoup"],
        ),
        project(
            "CTF Challenge Framework",
            "A dynamic platform for creating, hosting, and managing Capture The Flag competitions with real-time scoring and leaderboards.",
            "photo-1526374965328-7f61d4dc18c5",
            "ctf-framework",
            None,
            &["Next.js", "PostgreSQL", "Redis", "Docker"],
        ),
        project(
            "Network Security Toolkit",
            "Command-line tools for network reconnaissance, port scanning, and traffic analysis with customizable reporting features.",
            "photo-1518709268805-4e9042af2176",
            "network-toolkit",
            None,
            &["Go", "Bash", "Wireshark", "Nmap"],
        ),
        project(
            "Cryptographic Hash Analyzer",
            "A tool for analyzing and cracking various hash algorithms with dictionary and brute-force attack capabilities.",
            "photo-1516110833967-0b5716ca1387",
            "hash-analyzer",
            Some("https://hash-analyzer.ctrlxploit.com"),
            &["C++", "OpenSSL", "Qt", "CMake"],
        ),
        project(
            "Social Engineering Toolkit",
            "Educational platform demonstrating social engineering techniques and helping organizations train their employees against such attacks.",
            "photo-1550751827-4bd374c3f58b",
            "social-eng-toolkit",
            None,
            &["Python", "Django", "JavaScript", "Bootstrap"],
        ),
    ]
}

fn resources() -> Vec<ResourceRequest> {
    let resource = |heading: &str, description: &str, category, link: &str| ResourceRequest {
        heading: heading.to_string(),
        description: description.to_string(),
        category,
        link: link.to_string(),
    };

    vec![
        resource(
            "Introduction to Ethical Hacking/Pentesting",
            "Getting started with cybersecurity.",
            ResourceCategory::Guide,
            "https://resources.cyberlabs.club/security",
        ),
        resource(
            "OverTheWire Bandit",
            "Wargame for beginners to learn Linux and security concepts.",
            ResourceCategory::Wargame,
            "https://overthewire.org/wargames/bandit/",
        ),
        resource(
            "picoCTF",
            "Beginner-friendly CTF platform by Carnegie Mellon University.",
            ResourceCategory::CTF,
            "https://play.picoctf.org/practice",
        ),
        resource(
            "TryHackMe",
            "Online platform to learn cyber security through hands-on labs and exercises",
            ResourceCategory::CTF,
            "https://tryhackme.com/",
        ),
        resource(
            "CTF Handboook",
            "Comprehensive guide to Capture The Flag (CTF) competitions.",
            ResourceCategory::Guide,
            "https://ctf101.org/",
        ),
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("🌱 Starting database seeding...");

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&args.database_url)
        .await?;

    // Run migrations first
    println!("📋 Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await?;

    let level_repo = SqliteLevelRepository::new(db_pool.clone());
    let member_repo = SqliteMemberRepository::new(db_pool.clone());
    let profile_repo = SqliteProfileRepository::new(db_pool.clone());
    let project_repo = SqliteProjectRepository::new(db_pool.clone());
    let resource_repo = SqliteResourceRepository::new(db_pool.clone());
    let auth_service = AuthService::new(db_pool.clone(), args.email_domain.clone());

    // Levels
    if level_repo.list().await?.is_empty() {
        println!("🏷️  Creating levels...");
        for (position, seed) in LEVELS.iter().enumerate() {
            let level = level_repo.create(CreateLevelRequest {
                name: seed.name.to_string(),
                color: seed.color.to_string(),
                border_color: seed.color.to_string(),
                icon: seed.icon.to_string(),
                position: position as i64,
            }).await?;

            if !args.no_members {
                for username in seed.members {
                    member_repo.create(CreateMemberRequest {
                        username: username.to_string(),
                        level_id: level.id,
                    }).await?;
                }
            }
        }
        println!("  ✅ Created {} levels", LEVELS.len());
    } else {
        println!("  ⏭️  Levels already present, skipping levels and members");
    }

    // Admin login
    let email = auth_service.synthetic_email(&args.admin_username);
    let existing: Option<(String,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&db_pool)
        .await?;

    if existing.is_none() {
        let user_id = auth_service
            .create_user(&args.admin_username, &args.admin_password)
            .await?;
        profile_repo.create(user_id, &args.admin_username).await?;
        println!("  ✅ Created admin user ({} / {})", args.admin_username, args.admin_password);
    } else {
        println!("  ⏭️  Admin user {} already exists", email);
    }

    // Projects
    if project_repo.list().await?.is_empty() {
        println!("🛠️  Creating projects...");
        let list = projects();
        let count = list.len();
        for project in list {
            project_repo.create(project).await?;
        }
        println!("  ✅ Created {} projects", count);
    }

    // Resources
    if resource_repo.list().await?.is_empty() {
        println!("📚 Creating resources...");
        let list = resources();
        let count = list.len();
        for resource in list {
            resource_repo.create(resource).await?;
        }
        println!("  ✅ Created {} resources", count);
    }

    println!("🎉 Seeding complete!");

    Ok(())
}
