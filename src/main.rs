mod job;
mod reader;
mod xml;

use job::Job;

fn main() {
    let job = Job::default();

    if let Err(e) = job.run() {
        eprintln!("gvsgen: {}", e);
        std::process::exit(1);
    }
}
