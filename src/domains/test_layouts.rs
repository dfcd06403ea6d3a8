/// The classic tiny maze, whose unique shortest solution is eight moves.
pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%
";

/// The goal is walled off.
pub const SEALED_MAZE: &str = "\
%%%%%%
%P %.%
%%%%%%
";

/// An open room with the goal straight across from the start.
pub const OPEN_MAZE: &str = "\
%%%%%%%%%
%       %
%P     .%
%       %
%%%%%%%%%
";

pub const SMALL_CHASE: &str = "\
%%%%%%%
%P   .%
% %%% %
%  . G%
%%%%%%%
";

/// One resource right next to the protagonist, the threat far away.
pub const EASY_CHASE: &str = "\
%%%%%%%%
%P.    %
%%%%%% %
%G     %
%%%%%%%%
";
