/*!
 * Shell Module
 * Text command layer over the memory engine
 *
 * | command                   | effect                                  |
 * |---------------------------|-----------------------------------------|
 * | `A <p> <size> <F\|B\|W>`  | allocate with first, best, or worst fit |
 * | `F <p>`                   | free every slot of process `p`          |
 * | `S`, `SHOW`               | print the pool                          |
 * | `STAT`                    | print address ranges                    |
 * | `C`, `COMPACT`            | compact the pool                        |
 * | `CLEAR`                   | clear the terminal                      |
 * | `R <file>`                | run a script                            |
 * | `D`, `DUMP`               | print statistics as JSON                |
 * | `E`, `EXIT`               | end the session                         |
 */

pub mod command;
pub mod render;
pub mod session;

pub use command::{Command, CommandError};
pub use render::{render_pool, render_stat, PoolReport};
pub use session::{Flow, Shell};
