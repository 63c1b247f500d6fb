/// Veridex authenticity engine demo
///
/// Walks through the public operations:
/// - Ingesting a cohort of submissions
/// - Listing what is stored for a problem
/// - Checking a new submission against the cohort
/// - Producing the advisory authenticity report

use Veridex::core::config::Config;
use Veridex::core::engine::Engine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        Veridex - Authenticity Engine Demo     ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Open the engine
    println!("Step 1: Opening engine...");
    let config = Config::default();
    let threshold = config.similarity_threshold;
    let engine = Engine::open(config)?;
    println!("Done!\n");

    // Step 2: INGEST - Store a small cohort
    println!("Step 2: INGEST - Storing submissions...");

    engine.ingest(
        "def two_sum(nums, target):\n    seen = {}\n    for i, n in enumerate(nums):\n        if target - n in seen:\n            return [seen[target - n], i]\n        seen[n] = i\n    return []\n",
        "alice",
        "two-sum",
    );

    engine.ingest(
        "def two_sum(nums, target):\n    for i in range(len(nums)):\n        for j in range(i + 1, len(nums)):\n            if nums[i] + nums[j] == target:\n                return [i, j]\n    return []\n",
        "bob",
        "two-sum",
    );

    println!("  Ingested 2 submissions\n");

    // Step 3: LIST - What is stored for the problem
    println!("Step 3: LIST - Stored submissions for 'two-sum'...");
    for submission in engine.list_for_problem("two-sum") {
        println!("  {} by {}", submission.id, submission.author_id);
    }
    println!();

    // Step 4: CHECK - A near-verbatim copy of alice's solution, by carol
    println!("Step 4: CHECK - Near-verbatim resubmission by another author...");
    let check = engine.check_authenticity(
        "def two_sum(nums, target):\n    seen = {}\n    for i, n in enumerate(nums):\n        if target - n in seen:\n            return [seen[target - n], i]\n        seen[n] = i\n    return []\n",
        "carol",
        "two-sum",
        threshold,
    );
    println!("  max_score: {:.3}", check.max_score);
    match check.most_similar_id {
        Some(id) => println!("  most similar: {}", id),
        None => println!("  no submission above the threshold"),
    }
    println!();

    // Step 5: REPORT - Advisory risk with the decision policy applied
    println!("Step 5: REPORT - Advisory authenticity report...");
    let report = engine.authenticity_report(
        "def two_sum(nums, target):\n    seen = {}\n    for i, n in enumerate(nums):\n        if target - n in seen:\n            return [seen[target - n], i]\n        seen[n] = i\n    return []\n",
        "dave",
        "two-sum",
    );
    println!("  risk:    {:.1}/100", report.risk_score);
    println!("  verdict: {}", report.verdict);
    for reason in &report.reasons {
        println!("  reason:  {}", reason);
    }
    println!();

    // Step 6: STATS
    println!("Step 6: STATS");
    let stats = engine.stats();
    println!("  submissions: {}", stats.total_submissions);
    println!("  problems:    {}", stats.distinct_problems);
    println!("  authors:     {}", stats.distinct_authors);
    println!("  snapshot:    {} bytes", stats.snapshot_size_bytes);

    println!("\nDemo complete.");
    Ok(())
}
