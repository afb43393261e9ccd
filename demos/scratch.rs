use std::io::Read;

use rarena::{Arena, ArenaConfig, MmapProvider};

/// Waits for ENTER when the demo runs with `--pause`.
/// Useful for watching the mappings change with `pmap` between steps.
fn pause(enabled: bool) {
  if enabled {
    println!("\n>>> Press ENTER to continue...");
    let _ = std::io::stdin().bytes().next();
  }
}

fn print_state(
  label: &str,
  arena: &Arena<MmapProvider>,
) {
  println!(
    "[{}] blocks = {}, base = {:?}, position = {}/{}, scopes = {}",
    label,
    arena.block_count(),
    arena.base(),
    arena.position(),
    arena.capacity(),
    arena.scope_count(),
  );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();
  let paused = std::env::args().any(|arg| arg == "--pause");

  // Blocks are mapped straight from the OS, at least 16 KiB each.
  let config = ArenaConfig::new().with_min_block_size(16 * 1024);
  let mut arena = Arena::with_provider(MmapProvider::new(), config)?;

  print_state("start", &arena);
  pause(paused);

  // --------------------------------------------------------------------
  // 1) Long-lived data: a 32x32 weight matrix and a bias vector.
  // --------------------------------------------------------------------
  let weights = arena.push_array_zeroed::<f32>(32 * 32)?;
  let bias = arena.push_copy_slice(&[0.5f32; 32])?;
  println!("\n[1] weights at {:?}, bias at {:?}", weights, bias.cast::<f32>());
  print_state("1", &arena);
  pause(paused);

  // --------------------------------------------------------------------
  // 2) Training steps. Every step's activations live in a scope, and
  //    step 3 asks for more than the block holds, forcing growth.
  // --------------------------------------------------------------------
  for step in 0..5usize {
    let scope = arena.begin_scope();

    let len = if step == 3 { 64 * 1024 } else { 32 };
    let activations = arena.push_array::<f32>(len)?;

    unsafe {
      for i in 0..32 {
        let x = (step * 32 + i) as f32 * 0.01;
        activations.as_ptr().add(i).write(x);
        *weights.as_ptr().add(i) += x * *bias.cast::<f32>().as_ptr().add(i);
      }
    }

    print_state(&format!("2.{step} inside scope"), &arena);
    arena.end_scope(scope);
  }

  print_state("2 after steps", &arena);
  pause(paused);

  // --------------------------------------------------------------------
  // 3) Hand a fixed budget to a subsystem.
  // --------------------------------------------------------------------
  let mut sub = unsafe { arena.create_sub_arena(256, 16)? };
  let table = sub.push_array_zeroed::<u64>(32)?;
  println!("\n[3] sub-arena table at {:?}, sub remaining = {}", table, sub.remaining());
  sub.push_struct::<u8>()?;
  println!("[3] sub-arena grew on its own: {} blocks", sub.block_count());
  drop(sub);

  // --------------------------------------------------------------------
  // 4) Teardown.
  // --------------------------------------------------------------------
  unsafe { println!("\n[4] weights[5] = {}", *weights.as_ptr().add(5)) };
  arena.check_all_scopes_closed();
  arena.clear();
  print_state("4 cleared", &arena);

  Ok(())
}
